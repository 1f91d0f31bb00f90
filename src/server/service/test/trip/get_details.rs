use super::*;

/// Tests trip details with mixed reservations.
///
/// Expected: Ok with the live accepted count, matching availability and every
/// reservation listed with its passenger
#[tokio::test]
async fn reports_live_availability() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip, _) = factory::helpers::create_trip_and_passenger(db, 3).await?;
    for status in [
        ReservationStatus::Accepted,
        ReservationStatus::Accepted,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
    ] {
        factory::helpers::create_passenger_with_reservation(db, trip.id, status).await?;
    }

    let details = TripService::new(db).get_details(trip.id).await?;

    assert_eq!(details.driver.id, driver.id);
    assert_eq!(details.accepted_count, 2);
    assert_eq!(details.trip.available_seats(details.accepted_count), 1);
    assert_eq!(details.reservations.len(), 4);

    Ok(())
}

/// Tests availability of a trip whose seats were declared below its accepted count.
///
/// Expected: availability clamps to zero
#[tokio::test]
async fn availability_never_negative() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, _) = factory::helpers::create_trip_and_passenger(db, 0).await?;
    factory::helpers::create_passenger_with_reservation(db, trip.id, ReservationStatus::Accepted)
        .await?;

    let details = TripService::new(db).get_details(trip.id).await?;

    assert_eq!(details.trip.available_seats(details.accepted_count), 0);

    Ok(())
}

/// Tests fetching a trip that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripService::new(db).get_details(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
