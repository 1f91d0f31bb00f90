//! Administrator endpoints.
//!
//! Every handler requires `Permission::Admin`. Trip and user deletion go through the
//! same cascade as the owner-facing endpoints.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        notification::CreateNotificationDto,
        user::{SetRoleDto, UpdateUserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{notification::NewNotification, user::{UpdateUserParam, User}},
        service::{
            admin::AdminService, notification::NotificationService, trip::TripService,
            user::UserService,
        },
        state::AppState,
    },
};

/// List every account, ordered by name.
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .list(params.page, params.per_page(state.default_page_size))
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(User::into_dto))))
}

/// Update any account's profile, role included.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid field values
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No such user
/// - `409 Conflict` - Email already used by another account
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update(user_id, &admin, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Promote or demote an account.
pub async fn set_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(user_id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete another account with everything depending on it.
///
/// # Returns
/// - `200 OK` - Cascade report
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not an admin, or targeted their own account
/// - `404 Not Found` - No such user
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let report = UserService::new(&state.db)
        .delete_by_admin(user_id, &admin)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Delete any trip with its reservations.
pub async fn delete_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let report = TripService::new(&state.db).delete(trip_id, &admin).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Record a notification for a user.
///
/// # Returns
/// - `201 Created` - Notification recorded
/// - `400 Bad Request` - Empty message
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Recipient or linked reservation does not exist
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let notification = NotificationService::new(&state.db)
        .create(NewNotification::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Platform-wide counters.
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
