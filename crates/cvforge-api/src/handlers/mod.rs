//! Request handlers, one module per domain.

pub mod auth;
pub mod health;
pub mod media;
pub mod resume;
pub mod user;
