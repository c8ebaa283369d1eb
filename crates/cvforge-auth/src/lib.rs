//! # cvforge-auth
//!
//! Authentication and authorization for the CV Forge platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `rbac` — Role-based access control enforcement
//! - `code` — Numeric verification code generation

pub mod code;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{AccessRole, RbacEnforcer, RbacPolicies, SystemPermission};
