//! Resume builder and listing handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::{Validate, ValidateEmail};

use cvforge_auth::SystemPermission;
use cvforge_core::types::PageResponse;
use cvforge_core::AppError;
use cvforge_entity::resume::{
    Basics, MainSections, ResumeDocument, ResumeMeta, ResumeRecord, ResumeSummary,
};

use crate::dto::request::{GenerateResumePayload, ResumeFilterQuery};
use crate::dto::response::{ApiResponse, MessageResponse, StagingKeyResponse};
use crate::error::{validation_error, ApiError};
use crate::extractors::{AuthUser, MaybeAuthUser, PaginationParams};
use crate::middleware::rbac::authorize;
use crate::state::AppState;

/// POST /v1/resumes/basic — stage step one.
pub async fn stage_basic(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(basics): Json<Basics>,
) -> Result<(StatusCode, Json<ApiResponse<StagingKeyResponse>>), ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::ResumeBuild)?;
    check_basics(&basics)?;

    let key = state.resume_service.stage_basic(basics).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(StagingKeyResponse { key })),
    ))
}

/// POST /v1/resumes/main — stage step two.
pub async fn stage_main(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(main): Json<MainSections>,
) -> Result<(StatusCode, Json<ApiResponse<StagingKeyResponse>>), ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::ResumeBuild)?;

    let key = state.resume_service.stage_main(main).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(StagingKeyResponse { key })),
    ))
}

/// POST /v1/resumes/generate — assemble staged sections into a PDF.
pub async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<GenerateResumePayload>,
) -> Result<(StatusCode, Json<ApiResponse<ResumeRecord>>), ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::ResumeBuild)?;
    payload.validate().map_err(validation_error)?;

    let meta = ResumeMeta {
        template: payload.template,
        lang: payload.lang,
    };
    let record = state
        .resume_service
        .generate(&auth.0, payload.basic_key, payload.main_key, meta)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}

/// POST /v1/resumes — one-shot generation from a complete document.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(document): Json<ResumeDocument>,
) -> Result<(StatusCode, Json<ApiResponse<ResumeRecord>>), ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::ResumeBuild)?;
    check_basics(&document.basics)?;

    let record = state.resume_service.create(&auth.0, document).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}

/// GET /v1/resumes — public filtered listing.
pub async fn list(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Query(filter): Query<ResumeFilterQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ResumeSummary>>>, ApiError> {
    authorize(&state, auth.0.as_ref(), SystemPermission::ResumeList)?;

    let page = state
        .resume_service
        .list(&filter.into_filter(), &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /v1/resumes/me — the caller's own resumes.
pub async fn mine(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ResumeSummary>>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::ResumeList)?;

    let page = state
        .resume_service
        .mine(&auth.0, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /v1/resumes/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ResumeRecord>>, ApiError> {
    authorize(&state, auth.0.as_ref(), SystemPermission::ResumeList)?;

    let record = state.resume_service.get(id).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// DELETE /v1/resumes/{id} — owner or admin.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::ResumeDelete)?;

    state.resume_service.delete(&auth.0, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Resume deleted"))))
}

fn check_basics(basics: &Basics) -> Result<(), ApiError> {
    if !basics.email.validate_email() {
        return Err(AppError::validation("Invalid email address").into());
    }
    Ok(())
}
