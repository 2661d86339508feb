use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::config::AppState;
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::interceptors::{AppError, AppResult};
use crate::utils::{UserId, ValidatedJson};

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    Json(state.user_service.list_users().await)
}

/// Get a single user
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user(id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(user))
}

/// Create user, answering 201 with a Location pointing at the new resource
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> impl IntoResponse {
    let user = state.user_service.create_user(request).await;
    let location = format!("/users/{}", user.id);

    (StatusCode::CREATED, [(header::LOCATION, location)], Json(user))
}

/// Update user
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(id, request)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(user))
}

/// Delete user
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<StatusCode> {
    if !state.user_service.delete_user(id).await {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
