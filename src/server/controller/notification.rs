use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    controller::param::PaginationParam,
    error::AppError,
    middleware::auth::AuthGuard,
    model::notification::Notification,
    service::notification::NotificationService,
    state::AppState,
};

/// List the caller's notifications, unread first then newest first.
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list_for_user(user.id, params.page, params.per_page(state.default_page_size))
        .await?;

    Ok((
        StatusCode::OK,
        Json(notifications.into_dto(Notification::into_dto)),
    ))
}

/// Mark one of the caller's notifications as read.
///
/// # Returns
/// - `200 OK` - Notification with its read flag set
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not the recipient
/// - `404 Not Found` - No such notification
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(notification_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Delete a notification addressed to the caller.
///
/// # Returns
/// - `204 No Content` - Notification deleted
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is neither the recipient nor an admin
/// - `404 Not Found` - No such notification
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    NotificationService::new(&state.db)
        .delete(notification_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
