use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::reservation::{ChangeStatusDto, CreateReservationDto, ReservationSearchQuery},
    server::{
        controller::param::{resolve_per_page, PaginationParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{ReservationDecision, ReservationWithTrip},
        service::{
            reservation::ReservationService, seat_inventory::SeatInventoryService,
        },
        state::AppState,
    },
};

/// Request a seat on a trip.
///
/// # Returns
/// - `201 Created` - Pending reservation with its trip
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller drives the trip
/// - `404 Not Found` - No such trip
/// - `409 Conflict` - Caller already holds a reservation on the trip, or no seat left
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let passenger = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .create(payload.trip_id, &passenger)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List the caller's reservations, optionally searching trip places.
pub async fn get_my_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReservationSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let passenger = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let per_page = resolve_per_page(query.per_page, state.default_page_size);
    let reservations = ReservationService::new(&state.db)
        .list_for_passenger(passenger.id, query.search.as_deref(), query.page, per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(reservations.into_dto(ReservationWithTrip::into_dto)),
    ))
}

/// Get a reservation visible to the caller.
///
/// # Returns
/// - `200 OK` - Reservation with its trip
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not the passenger, the driver or an admin
/// - `404 Not Found` - No such reservation
pub async fn get_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .get_by_id(reservation_id, &caller)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Accept or refuse a pending reservation as the trip's driver.
///
/// # Returns
/// - `200 OK` - Reservation with its new status
/// - `400 Bad Request` - Status other than `accepted` or `refused`, or not pending
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not the trip's driver
/// - `404 Not Found` - No such reservation
/// - `409 Conflict` - No seat left or a concurrent decision won
pub async fn change_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<ChangeStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let decision = ReservationDecision::try_from(payload.status)?;

    let reservation = SeatInventoryService::new(&state.db)
        .change_status(reservation_id, driver.id, decision)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_summary_dto())))
}

/// Cancel one of the caller's reservations.
///
/// # Returns
/// - `200 OK` - Cancelled reservation
/// - `400 Bad Request` - Reservation already refused or cancelled
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not the passenger
/// - `404 Not Found` - No such reservation
pub async fn cancel_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let passenger = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .cancel(reservation_id, passenger.id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_summary_dto())))
}

/// List reservations on the trips the caller drives.
pub async fn get_driver_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .list_for_driver(
            driver.id,
            params.page,
            params.per_page(state.default_page_size),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(reservations.into_dto(ReservationWithTrip::into_dto)),
    ))
}
