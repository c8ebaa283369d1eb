//! Image upload handlers (multipart).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use cvforge_auth::SystemPermission;
use cvforge_core::AppError;
use cvforge_service::media::MediaKind;

use crate::dto::response::{ApiResponse, UploadResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::authorize;
use crate::state::AppState;

/// POST /v1/media/avatar
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), ApiError> {
    upload(state, auth, multipart, MediaKind::Avatar).await
}

/// POST /v1/media/photo
pub async fn upload_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), ApiError> {
    upload(state, auth, multipart, MediaKind::ResumePhoto).await
}

async fn upload(
    state: AppState,
    auth: AuthUser,
    mut multipart: Multipart,
    kind: MediaKind,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::MediaUpload)?;

    // First field named "file" wins; anything else is ignored.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::validation(format!("Malformed multipart body: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("Missing filename"))?;
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::validation(format!("Failed to read upload: {err}")))?;

        let url = state
            .media_service
            .upload(&auth.0, kind, &filename, data)
            .await?;
        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok(UploadResponse { url })),
        ));
    }

    Err(AppError::validation("Missing 'file' field in multipart body").into())
}
