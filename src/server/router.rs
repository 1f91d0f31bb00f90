use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::server::{
    controller::{admin, notification, reservation, trip, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(user::register))
        .route(
            "/api/users/me",
            get(user::get_me)
                .patch(user::update_me)
                .delete(user::delete_me),
        )
        .route("/api/users/{user_id}", get(user::get_user))
        .route(
            "/api/trips",
            get(trip::search_trips).post(trip::create_trip),
        )
        .route(
            "/api/trips/{trip_id}",
            get(trip::get_trip)
                .patch(trip::update_trip)
                .delete(trip::delete_trip),
        )
        .route("/api/driver/trips", get(trip::get_driver_trips))
        .route(
            "/api/reservations",
            get(reservation::get_my_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/{reservation_id}",
            get(reservation::get_reservation),
        )
        .route(
            "/api/reservations/{reservation_id}/status",
            patch(reservation::change_status),
        )
        .route(
            "/api/reservations/{reservation_id}/cancel",
            patch(reservation::cancel_reservation),
        )
        .route(
            "/api/driver/reservations",
            get(reservation::get_driver_reservations),
        )
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/{notification_id}/read",
            patch(notification::mark_read),
        )
        .route(
            "/api/notifications/{notification_id}",
            delete(notification::delete_notification),
        )
        .route("/api/admin/users", get(admin::get_users))
        .route(
            "/api/admin/users/{user_id}",
            patch(admin::update_user).delete(admin::delete_user),
        )
        .route("/api/admin/users/{user_id}/role", patch(admin::set_role))
        .route("/api/admin/trips/{trip_id}", delete(admin::delete_trip))
        .route(
            "/api/admin/notifications",
            post(admin::create_notification),
        )
        .route("/api/admin/stats", get(admin::get_stats))
}
