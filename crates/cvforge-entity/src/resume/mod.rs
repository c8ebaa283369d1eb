//! Resume entities: the JSON document assembled by the builder flow and
//! the normalized database records it is persisted into.

pub mod document;
pub mod enums;
pub mod record;

pub use document::{
    Basics, Certificate, Education, Interest, Language, Location, MainSections, Profile,
    Project, ResumeDocument, ResumeMeta, Skill, Work,
};
pub use enums::{JobLocation, JobType};
pub use record::{NewResume, ResumeFilter, ResumeRecord, ResumeSummary};
