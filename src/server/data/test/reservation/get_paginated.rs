use super::*;

/// Tests searching a passenger's reservations by trip origin or destination.
///
/// Expected: Ok with only the reservation whose trip matches
#[tokio::test]
async fn passenger_search_matches_trip_places() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db).await?;
    let passenger = factory::create_user(db).await?;
    let to_nice = factory::trip::TripFactory::new(db, driver.id)
        .destination("Nice")
        .build()
        .await?;
    let to_brest = factory::trip::TripFactory::new(db, driver.id)
        .destination("Brest")
        .build()
        .await?;
    let wanted = factory::create_reservation(db, to_nice.id, passenger.id).await?;
    factory::create_reservation(db, to_brest.id, passenger.id).await?;

    let repo = ReservationRepository::new(db);
    let (rows, total) = repo
        .get_by_passenger_paginated(passenger.id, Some("Nice"), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, wanted.id);
    assert_eq!(rows[0].1.id, to_nice.id);

    let (_, total) = repo
        .get_by_passenger_paginated(passenger.id, Some("  "), 0, 10)
        .await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests listing reservations on a driver's trips.
///
/// Expected: Ok with the reservations on the driver's trips only
#[tokio::test]
async fn driver_listing_covers_only_own_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let (_, other_trip) = factory::helpers::create_trip_with_driver(db).await?;
    factory::helpers::create_passenger_with_reservation(db, trip.id, ReservationStatus::Pending)
        .await?;
    factory::helpers::create_passenger_with_reservation(db, trip.id, ReservationStatus::Accepted)
        .await?;
    factory::helpers::create_passenger_with_reservation(
        db,
        other_trip.id,
        ReservationStatus::Pending,
    )
    .await?;

    let repo = ReservationRepository::new(db);
    let (rows, total) = repo.get_by_driver_paginated(driver.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(rows.iter().all(|(_, t)| t.driver_id == driver.id));

    Ok(())
}
