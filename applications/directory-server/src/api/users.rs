/// Users API routes
use crate::{
    error::{Result, ServerError, USER_NOT_FOUND},
    extract::{UserIdPath, UserPayload, UserQuery},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use directory_core::types::User;

/// GET /api/users/
/// List users, optionally filtered by `name` and `email` substrings
pub async fn list_users(
    State(app_state): State<AppState>,
    UserQuery(filter): UserQuery,
) -> Result<Json<Vec<User>>> {
    let users = app_state.store.list_users(&filter).await?;
    Ok(Json(users))
}

/// POST /api/users/
/// Create a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    UserPayload(draft): UserPayload,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = draft.validate()?;
    let user = app_state.store.create_user(new_user).await?;

    tracing::info!(user_id = user.id, "Created {}", user);
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id
pub async fn get_user(
    UserIdPath(id): UserIdPath,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(USER_NOT_FOUND.to_string()))?;

    Ok(Json(user))
}

/// PATCH /api/users/:id
/// Replace both name and email of an existing user
pub async fn update_user(
    UserIdPath(id): UserIdPath,
    State(app_state): State<AppState>,
    UserPayload(draft): UserPayload,
) -> Result<Json<User>> {
    // Validation runs before the store is touched
    let changes = draft.validate()?;
    let user = app_state.store.update_user(id, changes).await?;

    tracing::info!(user_id = user.id, "Updated {}", user);
    Ok(Json(user))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    UserIdPath(id): UserIdPath,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    app_state.store.delete_user(id).await?;

    tracing::info!(user_id = id, "Deleted user");
    Ok(Json(serde_json::json!({ "message": "User deleted" })))
}
