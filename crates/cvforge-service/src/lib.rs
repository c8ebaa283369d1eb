//! # cvforge-service
//!
//! Business logic for CV Forge. Services compose the repositories,
//! cache, storage, renderer, and notifier into the operations exposed
//! by the HTTP layer. No axum types appear here.

pub mod auth;
pub mod context;
pub mod media;
pub mod resume;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use media::MediaService;
pub use resume::ResumeService;
pub use user::UserService;
