//! Object store trait for S3-compatible storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for object storage backends.
///
/// The production implementation targets S3-compatible services
/// (MinIO in development) and lives in `cvforge-storage`. Tests use
/// lightweight in-memory fakes.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create the bucket if it does not already exist.
    async fn ensure_bucket(&self, bucket: &str) -> AppResult<()>;

    /// Upload an object.
    async fn put(&self, bucket: &str, key: &str, data: Bytes, content_type: &str)
        -> AppResult<()>;

    /// Delete an object.
    async fn delete(&self, bucket: &str, key: &str) -> AppResult<()>;

    /// Check whether an object exists.
    async fn exists(&self, bucket: &str, key: &str) -> AppResult<bool>;

    /// Build the public URL of an object.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
