//! Image uploads for avatars and resume photos.

pub mod service;

pub use service::{MediaKind, MediaService};
