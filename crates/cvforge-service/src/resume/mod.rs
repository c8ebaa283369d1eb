//! Resume staging, generation, listing, and deletion.

pub mod service;

pub use service::ResumeService;
