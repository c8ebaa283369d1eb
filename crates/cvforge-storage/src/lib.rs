//! # cvforge-storage
//!
//! S3-compatible object storage for CV Forge. Generated resume PDFs and
//! uploaded media land in MinIO during development and any S3-compatible
//! service in production. The [`ObjectStore`] trait lives in
//! `cvforge-core`; this crate provides the production implementation
//! plus the object naming scheme.
//!
//! [`ObjectStore`]: cvforge_core::traits::ObjectStore

pub mod names;
pub mod s3;

pub use s3::S3ObjectStore;
