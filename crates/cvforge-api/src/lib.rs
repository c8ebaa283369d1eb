//! # cvforge-api
//!
//! The HTTP surface of CV Forge: routing, request/response DTOs,
//! authentication extraction, and the mapping from domain errors to
//! HTTP status codes. All business logic lives in `cvforge-service`.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
