//! User profile and administration operations.

pub mod service;

pub use service::{CreateAccount, UpdateProfile, UserService};
