use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::{RegisterUserDto, UpdateUserDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{RegisterUserParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Register a new account.
///
/// Called by the external authentication capability once it has hashed the
/// credential. The account gets the `user` role.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Blank name, malformed email or empty credential hash
/// - `409 Conflict` - Email already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get the authenticated caller's profile.
///
/// # Returns
/// - `200 OK` - Caller profile
/// - `401 Unauthorized` - Missing or unknown caller
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's own profile.
///
/// An empty `photo` removes the photo. Setting `role` is rejected for non-admins.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid field values
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Role change attempted by a non-admin
/// - `409 Conflict` - Email already used by another account
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let updated = UserService::new(&state.db)
        .update(user.id, &user, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete the caller's own account with everything depending on it.
///
/// # Returns
/// - `200 OK` - Cascade report
/// - `401 Unauthorized` - Missing or unknown caller
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let report = UserService::new(&state.db).delete_self(&user).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Get another user's public profile.
///
/// # Returns
/// - `200 OK` - Public profile (name and photo)
/// - `401 Unauthorized` - Missing or unknown caller
/// - `404 Not Found` - No such user
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_summary_dto())))
}
