//! S3-compatible object store implementation.

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{debug, info};

use cvforge_core::config::storage::StorageConfig;
use cvforge_core::error::{AppError, ErrorKind};
use cvforge_core::result::AppResult;
use cvforge_core::traits::storage::ObjectStore;

/// Object store backed by an S3-compatible service (MinIO in development).
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    /// Base URL for public object links.
    public_base_url: String,
}

impl S3ObjectStore {
    /// Build a client configured for MinIO (local) or AWS (production).
    pub async fn connect(config: &StorageConfig) -> AppResult<Self> {
        info!(endpoint = %config.endpoint, region = %config.region, "Initializing object storage client");

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "cvforge-static",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&config.endpoint)
            .load()
            .await;

        // MinIO does not resolve virtual-hosted bucket names.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        let public_base_url = if config.public_base_url.is_empty() {
            config.endpoint.trim_end_matches('/').to_string()
        } else {
            config.public_base_url.trim_end_matches('/').to_string()
        };

        Ok(Self {
            client: Client::from_conf(s3_config),
            public_base_url,
        })
    }

    fn map_err(context: &str, e: impl std::error::Error + Send + Sync + 'static) -> AppError {
        AppError::with_source(ErrorKind::Storage, context.to_string(), e)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn ensure_bucket(&self, bucket: &str) -> AppResult<()> {
        let exists = self
            .client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .is_ok();

        if exists {
            debug!(bucket, "Bucket already exists");
            return Ok(());
        }

        self.client
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| Self::map_err("Failed to create bucket", e))?;

        info!(bucket, "Created bucket");
        Ok(())
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| Self::map_err("Failed to upload object", e))?;

        debug!(bucket, key, "Uploaded object");
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| Self::map_err("Failed to delete object", e))?;

        debug!(bucket, key, "Deleted object");
        Ok(())
    }

    async fn exists(&self, bucket: &str, key: &str) -> AppResult<bool> {
        Ok(self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .is_ok())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{bucket}/{key}", self.public_base_url)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.client
            .list_buckets()
            .send()
            .await
            .map(|_| true)
            .map_err(|e| Self::map_err("Object storage health check failed", e))
    }
}
