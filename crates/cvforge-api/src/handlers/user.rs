//! User profile and admin user management handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use cvforge_auth::SystemPermission;
use cvforge_core::types::PageResponse;
use cvforge_service::user::{CreateAccount, UpdateProfile};

use crate::dto::request::{ChangePasswordPayload, CreateUserPayload, UpdateProfilePayload};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::{validation_error, ApiError};
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::authorize;
use crate::state::AppState;

/// POST /v1/users (admin)
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateUserPayload>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserCreate)?;
    payload.validate().map_err(validation_error)?;

    let user = state
        .user_service
        .create(
            &auth.0,
            CreateAccount {
                full_name: payload.full_name,
                email: payload.email,
                phone_number: payload.phone_number,
                password: payload.password,
                role: payload.role,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// GET /v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserRead)?;
    let user = state.user_service.me(&auth.0).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserUpdate)?;
    payload.validate().map_err(validation_error)?;

    let user = state
        .user_service
        .update(&auth.0, auth.user_id, into_update(payload))
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /v1/users/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ChangePasswordPayload>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserUpdate)?;
    payload.validate().map_err(validation_error)?;

    state
        .user_service
        .change_password(&auth.0, &payload.current_password, &payload.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password changed",
    ))))
}

/// GET /v1/users (admin)
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserList)?;

    let page = state
        .user_service
        .list(&auth.0, &pagination.into_page_request())
        .await?;

    let users = PageResponse {
        items: page.items.into_iter().map(UserResponse::from).collect(),
        page: page.page,
        page_size: page.page_size,
        total_items: page.total_items,
        total_pages: page.total_pages,
        has_next: page.has_next,
        has_previous: page.has_previous,
    };
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /v1/users/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserRead)?;
    let user = state.user_service.get(&auth.0, id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserUpdate)?;
    payload.validate().map_err(validation_error)?;

    let user = state
        .user_service
        .update(&auth.0, id, into_update(payload))
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /v1/users/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    authorize(&state, Some(&auth.0), SystemPermission::UserDelete)?;

    state.user_service.delete(&auth.0, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("User deleted"))))
}

fn into_update(payload: UpdateProfilePayload) -> UpdateProfile {
    UpdateProfile {
        full_name: payload.full_name,
        phone_number: payload.phone_number,
        image_url: payload.image_url,
    }
}
