//! Registration, login, token refresh, and password recovery.

pub mod service;

pub use service::{AuthService, PendingSignup, RegisterRequest};
