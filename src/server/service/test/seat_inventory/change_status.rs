use super::*;

/// Tests accepting a pending reservation with a free seat.
///
/// Expected: Ok with status `accepted` and a confirmation sent to the passenger
#[tokio::test]
async fn accepts_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip, passenger) = factory::helpers::create_trip_and_passenger(db, 2).await?;
    let reservation = factory::create_reservation(db, trip.id, passenger.id).await?;

    let service = SeatInventoryService::new(db);
    let updated = service
        .change_status(reservation.id, driver.id, ReservationDecision::Accept)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Accepted);
    assert_eq!(
        ReservationRepository::new(db).count_accepted(trip.id).await?,
        1
    );

    let notifications = NotificationRepository::new(db)
        .find_by_recipient(passenger.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Confirmation);
    assert_eq!(notifications[0].reservation_id, Some(reservation.id));

    Ok(())
}

/// Tests refusing a pending reservation.
///
/// Expected: Ok with status `refused`, no seat consumed and a refusal notification
#[tokio::test]
async fn refuses_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip, passenger) = factory::helpers::create_trip_and_passenger(db, 1).await?;
    let reservation = factory::create_reservation(db, trip.id, passenger.id).await?;

    let service = SeatInventoryService::new(db);
    let updated = service
        .change_status(reservation.id, driver.id, ReservationDecision::Refuse)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Refused);
    assert_eq!(
        ReservationRepository::new(db).count_accepted(trip.id).await?,
        0
    );

    let notifications = NotificationRepository::new(db)
        .find_by_recipient(passenger.id)
        .await?;
    assert_eq!(notifications[0].kind, NotificationKind::Refusal);

    Ok(())
}

/// Tests that only the trip's driver can decide.
///
/// Expected: Err(Forbidden) for the passenger and for an administrator
#[tokio::test]
async fn rejects_non_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, passenger) = factory::helpers::create_trip_and_passenger(db, 2).await?;
    let admin = factory::user::create_admin(db).await?;
    let reservation = factory::create_reservation(db, trip.id, passenger.id).await?;

    let service = SeatInventoryService::new(db);
    for caller_id in [passenger.id, admin.id] {
        let result = service
            .change_status(reservation.id, caller_id, ReservationDecision::Accept)
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    Ok(())
}

/// Tests deciding on a reservation that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SeatInventoryService::new(db);
    let result = service
        .change_status(404, 1, ReservationDecision::Accept)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only pending reservations can be decided.
///
/// Covers state-machine closure: every transition out of a non-pending state fails
/// and leaves the stored status untouched.
///
/// Expected: Err(InvalidState) for every decision on accepted, refused and cancelled
#[tokio::test]
async fn rejects_non_pending_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db).await?;
    let trip = factory::trip::TripFactory::new(db, driver.id)
        .seats(10)
        .build()
        .await?;
    let service = SeatInventoryService::new(db);
    let repo = ReservationRepository::new(db);

    for status in [
        ReservationStatus::Accepted,
        ReservationStatus::Refused,
        ReservationStatus::Cancelled,
    ] {
        let (_, reservation) =
            factory::helpers::create_passenger_with_reservation(db, trip.id, status).await?;

        for decision in [ReservationDecision::Accept, ReservationDecision::Refuse] {
            let result = service
                .change_status(reservation.id, driver.id, decision)
                .await;
            assert!(
                matches!(result, Err(AppError::InvalidState(_))),
                "{:?} -> {:?} should be rejected",
                status,
                decision
            );
        }

        let stored = repo.find_by_id(reservation.id).await?.unwrap();
        assert_eq!(stored.status, status);
    }

    Ok(())
}

/// Tests accepting when accepted reservations already fill the trip.
///
/// Expected: Err(Unavailable) and the reservation still pending
#[tokio::test]
async fn rejects_accept_on_full_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip, passenger) = factory::helpers::create_trip_and_passenger(db, 1).await?;
    factory::helpers::create_passenger_with_reservation(db, trip.id, ReservationStatus::Accepted)
        .await?;
    let reservation = factory::create_reservation(db, trip.id, passenger.id).await?;

    let service = SeatInventoryService::new(db);
    let result = service
        .change_status(reservation.id, driver.id, ReservationDecision::Accept)
        .await;

    assert!(matches!(result, Err(AppError::Unavailable(_))));
    let stored = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ReservationStatus::Pending);

    Ok(())
}

/// Tests that refusing never needs a free seat.
///
/// Expected: Ok with status `refused` on a full trip
#[tokio::test]
async fn refuses_on_full_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip, passenger) = factory::helpers::create_trip_and_passenger(db, 0).await?;
    let reservation = factory::create_reservation(db, trip.id, passenger.id).await?;

    let service = SeatInventoryService::new(db);
    let updated = service
        .change_status(reservation.id, driver.id, ReservationDecision::Refuse)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Refused);

    Ok(())
}
