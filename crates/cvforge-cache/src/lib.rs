//! # cvforge-cache
//!
//! Cache provider implementations for CV Forge. Supports two modes:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. Staged
//! resume sections and verification codes live here, so production
//! deployments use Redis; the in-memory provider covers tests and
//! single-node development.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
