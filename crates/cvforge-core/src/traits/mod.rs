//! Core traits defined in `cvforge-core` and implemented by other crates.

pub mod cache;
pub mod storage;

pub use cache::CacheProvider;
pub use storage::ObjectStore;
