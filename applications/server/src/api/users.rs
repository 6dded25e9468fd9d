/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{User, UserStore, UserUpdate};

/// GET /users/
/// Get all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.registry.list_users().await?;
    Ok(Json(users))
}

/// GET /users/:id
/// Get a single user by id
pub async fn get_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.registry.get_user(id).await?;
    Ok(Json(user))
}

/// POST /users/
/// Create a new user; the id is chosen by the caller
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state.registry.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id
/// Apply a partial update; absent fields are left unchanged
pub async fn update_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>> {
    let user = app_state.registry.update_user(id, update).await?;
    Ok(Json(user))
}

/// DELETE /users/:id
/// Remove a user, returning the removed record
pub async fn delete_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.registry.delete_user(id).await?;
    Ok(Json(user))
}
