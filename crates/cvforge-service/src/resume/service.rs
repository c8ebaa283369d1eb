//! The resume builder: staged sections in the cache, PDF generation,
//! object storage upload, and the persisted records.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use cvforge_cache::{keys, CacheManager};
use cvforge_core::config::{ResumeConfig, StorageConfig};
use cvforge_core::events::ResumeCreatedEvent;
use cvforge_core::traits::{CacheProvider, ObjectStore};
use cvforge_core::types::{PageRequest, PageResponse};
use cvforge_core::{AppError, AppResult};
use cvforge_database::repositories::resume::ResumeRepository;
use cvforge_entity::resume::{
    Basics, MainSections, NewResume, ResumeDocument, ResumeFilter, ResumeMeta, ResumeRecord,
    ResumeSummary,
};
use cvforge_notify::Notifier;
use cvforge_render::{render_html, PdfEngine, Template};
use cvforge_storage::names;

use crate::context::RequestContext;

/// Drives the multi-step resume builder and the generation pipeline.
#[derive(Clone)]
pub struct ResumeService {
    resume_repo: Arc<ResumeRepository>,
    cache: CacheManager,
    store: Arc<dyn ObjectStore>,
    pdf: Arc<dyn PdfEngine>,
    notifier: Notifier,
    resume_bucket: String,
    staging_ttl: Duration,
}

impl ResumeService {
    pub fn new(
        resume_repo: Arc<ResumeRepository>,
        cache: CacheManager,
        store: Arc<dyn ObjectStore>,
        pdf: Arc<dyn PdfEngine>,
        notifier: Notifier,
        storage_config: &StorageConfig,
        resume_config: &ResumeConfig,
    ) -> Self {
        Self {
            resume_repo,
            cache,
            store,
            pdf,
            notifier,
            resume_bucket: storage_config.resume_bucket.clone(),
            staging_ttl: Duration::from_secs(resume_config.staging_ttl_seconds),
        }
    }

    /// Stages step one (personal info) and returns its staging key.
    pub async fn stage_basic(&self, basics: Basics) -> AppResult<Uuid> {
        let key = Uuid::new_v4();
        self.cache
            .set_json(&keys::staging_basic(key), &basics, self.staging_ttl)
            .await?;
        Ok(key)
    }

    /// Stages step two (history sections) and returns its staging key.
    pub async fn stage_main(&self, main: MainSections) -> AppResult<Uuid> {
        let key = Uuid::new_v4();
        self.cache
            .set_json(&keys::staging_main(key), &main, self.staging_ttl)
            .await?;
        Ok(key)
    }

    /// Assembles the staged sections into a document, runs the
    /// generation pipeline, and discards the staging entries.
    pub async fn generate(
        &self,
        ctx: &RequestContext,
        basic_key: Uuid,
        main_key: Uuid,
        meta: ResumeMeta,
    ) -> AppResult<ResumeRecord> {
        let basics: Basics = self
            .cache
            .get_json(&keys::staging_basic(basic_key))
            .await?
            .ok_or_else(|| AppError::not_found("Basic section expired or never staged"))?;
        let main: MainSections = self
            .cache
            .get_json(&keys::staging_main(main_key))
            .await?
            .ok_or_else(|| AppError::not_found("Main section expired or never staged"))?;

        let document = ResumeDocument::from_parts(basics, main, meta);
        let record = self.run_pipeline(ctx, document).await?;

        // Staging entries would expire anyway; removal just keeps the
        // keys from being reused.
        self.cache.delete(&keys::staging_basic(basic_key)).await?;
        self.cache.delete(&keys::staging_main(main_key)).await?;

        Ok(record)
    }

    /// One-shot generation from a complete document, skipping staging.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        document: ResumeDocument,
    ) -> AppResult<ResumeRecord> {
        self.run_pipeline(ctx, document).await
    }

    /// Public listing with optional filters.
    pub async fn list(
        &self,
        filter: &ResumeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ResumeSummary>> {
        self.resume_repo.list(filter, page).await
    }

    /// The current user's own resumes.
    pub async fn mine(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ResumeSummary>> {
        self.resume_repo.list_by_user(ctx.user_id, page).await
    }

    /// Loads a single resume record.
    pub async fn get(&self, id: Uuid) -> AppResult<ResumeRecord> {
        self.resume_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Resume not found"))
    }

    /// Deletes a resume and its stored PDF. Owner or admin only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let record = self.get(id).await?;
        if !ctx.can_act_on(record.user_id) {
            return Err(AppError::forbidden("Cannot delete another user's resume"));
        }

        // Remove the PDF first; a dangling row is worse than a
        // dangling object.
        if let Err(err) = self.store.delete(&self.resume_bucket, &record.filename).await {
            warn!(resume_id = %id, error = %err, "failed to delete stored pdf");
        }
        self.resume_repo.delete(id).await?;

        info!(resume_id = %id, user_id = %ctx.user_id, "resume deleted");
        Ok(())
    }

    /// Render, upload, persist, announce.
    async fn run_pipeline(
        &self,
        ctx: &RequestContext,
        document: ResumeDocument,
    ) -> AppResult<ResumeRecord> {
        // Reject bad templates before paying for the PDF run.
        Template::parse(&document.meta.template)?;

        let html = render_html(&document)?;
        let pdf_bytes = self.pdf.html_to_pdf(&html).await?;

        let resume_id = Uuid::new_v4();
        let filename = names::resume_pdf(&document.basics.name, resume_id);
        self.store
            .put(
                &self.resume_bucket,
                &filename,
                Bytes::from(pdf_bytes),
                "application/pdf",
            )
            .await?;
        let url = self.store.public_url(&self.resume_bucket, &filename);

        let record = self
            .resume_repo
            .create(&NewResume {
                id: resume_id,
                user_id: ctx.user_id,
                url: url.clone(),
                filename,
                document: document.clone(),
            })
            .await?;

        self.notifier.resume_created(&created_event(&record, &document)).await;

        info!(resume_id = %record.id, user_id = %ctx.user_id, "resume generated");
        Ok(record)
    }
}

fn created_event(record: &ResumeRecord, document: &ResumeDocument) -> ResumeCreatedEvent {
    let mut links: Vec<String> = document
        .basics
        .profiles
        .iter()
        .map(|p| p.url.clone())
        .collect();
    if !document.basics.url.is_empty() {
        links.push(document.basics.url.clone());
    }

    ResumeCreatedEvent {
        resume_id: record.id,
        user_id: record.user_id,
        full_name: record.full_name.clone(),
        email: record.email.clone(),
        phone_number: record.phone_number.clone(),
        job_title: record.job_title.clone(),
        resume_url: record.url.clone(),
        links,
        city: document.basics.location.city.clone(),
        salary: record.salary.to_string(),
        summary: record.summary.clone(),
        created_at: record.created_at,
    }
}
