use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::trip::{CreateTripDto, TripSearchQuery, UpdateTripDto},
    server::{
        controller::param::{resolve_per_page, PaginationParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::trip::{CreateTripParam, TripFilter, TripListing, UpdateTripParam},
        service::trip::TripService,
        state::AppState,
    },
};

/// Search published trips.
///
/// Public endpoint. Filters on origin and destination substrings and an optional
/// departure day; results are ordered by departure and carry live availability.
///
/// # Returns
/// - `200 OK` - Paginated trip listings
pub async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<TripSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let per_page = resolve_per_page(query.per_page, state.default_page_size);

    let trips = TripService::new(&state.db)
        .search(TripFilter::from_query(&query), query.page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(trips.into_dto(TripListing::into_dto))))
}

/// Publish a trip driven by the caller.
///
/// # Returns
/// - `201 Created` - Trip published
/// - `400 Bad Request` - Blank places, negative seats or price
/// - `401 Unauthorized` - Missing or unknown caller
pub async fn create_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let trip = TripService::new(&state.db)
        .create(&driver, CreateTripParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

/// Get a trip with its driver, availability and reservations.
///
/// # Returns
/// - `200 OK` - Trip details
/// - `404 Not Found` - No such trip
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = TripService::new(&state.db).get_details(trip_id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Update a trip owned by the caller.
///
/// # Returns
/// - `200 OK` - Updated trip
/// - `400 Bad Request` - Invalid field values
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller is not the driver
/// - `404 Not Found` - No such trip
/// - `409 Conflict` - Seats lowered below the accepted reservations
pub async fn update_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
    Json(payload): Json<UpdateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let trip = TripService::new(&state.db)
        .update(trip_id, &caller, UpdateTripParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Delete a trip owned by the caller along with its reservations.
///
/// # Returns
/// - `200 OK` - Cascade report
/// - `401 Unauthorized` - Missing or unknown caller
/// - `403 Forbidden` - Caller neither drives the trip nor is an admin
/// - `404 Not Found` - No such trip
pub async fn delete_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let report = TripService::new(&state.db).delete(trip_id, &caller).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// List the trips the caller drives.
pub async fn get_driver_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let trips = TripService::new(&state.db)
        .list_for_driver(
            &driver,
            params.page,
            params.per_page(state.default_page_size),
        )
        .await?;

    Ok((StatusCode::OK, Json(trips.into_dto(TripListing::into_dto))))
}
