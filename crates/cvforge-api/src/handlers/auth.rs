//! Authentication handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use cvforge_service::auth::RegisterRequest;

use crate::dto::request::{
    ForgotPasswordPayload, LoginPayload, RefreshPayload, RegisterPayload, ResetPasswordPayload,
    VerifyPayload,
};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse};
use crate::error::{validation_error, ApiError};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    payload.validate().map_err(validation_error)?;

    state
        .auth_service
        .register(RegisterRequest {
            full_name: payload.full_name,
            email: payload.email,
            phone_number: payload.phone_number,
            password: payload.password,
        })
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::ok(MessageResponse::new(
            "Verification code sent",
        ))),
    ))
}

/// POST /v1/auth/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(payload): Json<VerifyPayload>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    payload.validate().map_err(validation_error)?;

    let (user, tokens) = state
        .auth_service
        .verify_signup(&payload.email, &payload.code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AuthResponse::new(user, tokens))),
    ))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let (user, tokens) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::new(user, tokens))))
}

/// POST /v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshPayload>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let (user, tokens) = state.auth_service.refresh(&payload.refresh_token).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::new(user, tokens))))
}

/// POST /v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.auth_service.logout(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Logged out"))))
}

/// POST /v1/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordPayload>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    payload.validate().map_err(validation_error)?;

    state.auth_service.forgot_password(&payload.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Reset code sent",
    ))))
}

/// POST /v1/auth/reset-password/verify
pub async fn verify_reset_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyPayload>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    payload.validate().map_err(validation_error)?;

    state
        .auth_service
        .verify_reset_code(&payload.email, &payload.code)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Code accepted"))))
}

/// POST /v1/auth/reset-password
///
/// Signs the user in on success so the client does not need a second
/// login round-trip.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordPayload>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let (user, tokens) = state
        .auth_service
        .reset_password(&payload.email, &payload.code, &payload.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(AuthResponse::new(user, tokens))))
}
