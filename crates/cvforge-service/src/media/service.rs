//! Validated image uploads to the media bucket.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use cvforge_core::config::StorageConfig;
use cvforge_core::traits::ObjectStore;
use cvforge_core::{AppError, AppResult};
use cvforge_storage::names;

use crate::context::RequestContext;

/// Where an uploaded image is going to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Profile avatar.
    Avatar,
    /// Photo embedded in a resume.
    ResumePhoto,
}

/// Validates and stores image uploads, returning their public URL.
#[derive(Clone)]
pub struct MediaService {
    store: Arc<dyn ObjectStore>,
    media_bucket: String,
    max_size_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl MediaService {
    pub fn new(store: Arc<dyn ObjectStore>, config: &StorageConfig) -> Self {
        Self {
            store,
            media_bucket: config.media_bucket.clone(),
            max_size_bytes: config.max_upload_size_bytes,
            allowed_extensions: config.allowed_extensions.clone(),
        }
    }

    /// Uploads an image and returns its public URL.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        kind: MediaKind,
        filename: &str,
        data: Bytes,
    ) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if data.len() as u64 > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the {} byte upload limit",
                self.max_size_bytes
            )));
        }
        let extension = self.validate_extension(filename)?;

        let file_id = Uuid::new_v4();
        let key = match kind {
            MediaKind::Avatar => names::avatar(file_id, &extension),
            MediaKind::ResumePhoto => names::resume_photo(file_id, &extension),
        };
        let content_type = content_type_for(&extension);

        self.store
            .put(&self.media_bucket, &key, data, content_type)
            .await?;
        let url = self.store.public_url(&self.media_bucket, &key);

        info!(user_id = %ctx.user_id, key = %key, "media uploaded");
        Ok(url)
    }

    fn validate_extension(&self, filename: &str) -> AppResult<String> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| AppError::validation("Filename has no extension"))?;

        if !self.allowed_extensions.iter().any(|a| a == &extension) {
            return Err(AppError::validation(format!(
                "File type '{extension}' is not allowed; use one of: {}",
                self.allowed_extensions.join(", ")
            )));
        }
        Ok(extension)
    }
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use cvforge_core::error::ErrorKind;
    use cvforge_entity::user::UserRole;

    use super::*;

    #[derive(Debug, Default)]
    struct FakeStore {
        objects: Mutex<HashMap<String, Bytes>>,
    }

    #[async_trait]
    impl ObjectStore for FakeStore {
        async fn ensure_bucket(&self, _bucket: &str) -> AppResult<()> {
            Ok(())
        }

        async fn put(
            &self,
            bucket: &str,
            key: &str,
            data: Bytes,
            _content_type: &str,
        ) -> AppResult<()> {
            self.objects
                .lock()
                .unwrap()
                .insert(format!("{bucket}/{key}"), data);
            Ok(())
        }

        async fn delete(&self, bucket: &str, key: &str) -> AppResult<()> {
            self.objects.lock().unwrap().remove(&format!("{bucket}/{key}"));
            Ok(())
        }

        async fn exists(&self, bucket: &str, key: &str) -> AppResult<bool> {
            Ok(self.objects.lock().unwrap().contains_key(&format!("{bucket}/{key}")))
        }

        fn public_url(&self, bucket: &str, key: &str) -> String {
            format!("http://localhost:9000/{bucket}/{key}")
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(true)
        }
    }

    fn service(store: Arc<FakeStore>) -> MediaService {
        MediaService::new(
            store,
            &StorageConfig {
                endpoint: "http://localhost:9000".into(),
                region: "us-east-1".into(),
                resume_bucket: "resumes".into(),
                media_bucket: "media".into(),
                access_key: "minio".into(),
                secret_key: "minio123".into(),
                public_base_url: "http://localhost:9000".into(),
                max_upload_size_bytes: 1024,
                allowed_extensions: vec!["png".into(), "jpg".into()],
            },
        )
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), UserRole::User, "user@example.com".into())
    }

    #[tokio::test]
    async fn uploads_and_returns_public_url() {
        let store = Arc::new(FakeStore::default());
        let service = service(store.clone());

        let url = service
            .upload(&ctx(), MediaKind::Avatar, "photo.PNG", Bytes::from_static(b"img"))
            .await
            .unwrap();

        assert!(url.starts_with("http://localhost:9000/media/avatars/"));
        assert!(url.ends_with(".png"));
        assert_eq!(store.objects.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_disallowed_extension() {
        let service = service(Arc::new(FakeStore::default()));
        let err = service
            .upload(&ctx(), MediaKind::Avatar, "script.exe", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("exe"));
    }

    #[tokio::test]
    async fn rejects_oversized_upload() {
        let service = service(Arc::new(FakeStore::default()));
        let big = Bytes::from(vec![0u8; 2048]);
        let err = service
            .upload(&ctx(), MediaKind::ResumePhoto, "photo.jpg", big)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn rejects_missing_extension() {
        let service = service(Arc::new(FakeStore::default()));
        let err = service
            .upload(&ctx(), MediaKind::Avatar, "noext", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
