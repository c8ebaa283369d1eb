//! Concrete repository implementations.

pub mod resume;
pub mod user;

pub use resume::ResumeRepository;
pub use user::UserRepository;
