use super::*;

/// Tests deleting a user who drives trips and rides on others.
///
/// Expected: Ok with the user's trips, reservations on those trips, the user's own
/// reservations and notifications removed; affected parties notified
#[tokio::test]
async fn removes_everything_owned_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    // Trip driven by the departing user with one accepted passenger.
    let (leaving, driven_trip) = factory::helpers::create_trip_with_driver(db).await?;
    let (rider, _) = factory::helpers::create_passenger_with_reservation(
        db,
        driven_trip.id,
        ReservationStatus::Accepted,
    )
    .await?;

    // Trip driven by someone else where the departing user holds a reservation.
    let (other_driver, other_trip) = factory::helpers::create_trip_with_driver(db).await?;
    factory::reservation::ReservationFactory::new(db, other_trip.id, leaving.id)
        .status(ReservationStatus::Pending)
        .build()
        .await?;

    factory::create_notification(db, leaving.id).await?;

    let report = CascadeService::new(db).delete_user(leaving.id).await?;

    assert_eq!(report.trips_deleted, 1);
    assert_eq!(report.reservations_deleted, 2);
    assert_eq!(report.notifications_sent, 2);

    assert!(entity::prelude::User::find_by_id(leaving.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::Trip::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);

    let notifications = NotificationRepository::new(db);
    assert!(notifications.find_by_recipient(leaving.id).await?.is_empty());
    assert_eq!(notifications.find_by_recipient(rider.id).await?.len(), 1);
    assert_eq!(
        notifications.find_by_recipient(other_driver.id).await?.len(),
        1
    );

    Ok(())
}

/// Tests deleting a user with no trips, reservations or notifications.
///
/// Expected: Ok with an empty report
#[tokio::test]
async fn deletes_user_without_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let report = CascadeService::new(db).delete_user(user.id).await?;

    assert_eq!(report.trips_deleted, 0);
    assert_eq!(report.reservations_deleted, 0);
    assert_eq!(report.notifications_sent, 0);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CascadeService::new(db).delete_user(3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a driver whose trips carry reservations in several statuses.
///
/// Expected: Ok with both trips purged and every passenger sent one unlinked
/// cancellation, refused and cancelled riders included
#[tokio::test]
async fn notifies_every_passenger_of_driven_trips() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leaving, first_trip) = factory::helpers::create_trip_with_driver(db).await?;
    let second_trip = factory::create_trip(db, leaving.id).await?;

    let mut passengers = Vec::new();
    for (trip_id, status) in [
        (first_trip.id, ReservationStatus::Pending),
        (first_trip.id, ReservationStatus::Refused),
        (second_trip.id, ReservationStatus::Accepted),
        (second_trip.id, ReservationStatus::Cancelled),
    ] {
        let (passenger, _) =
            factory::helpers::create_passenger_with_reservation(db, trip_id, status).await?;
        passengers.push(passenger);
    }

    let report = CascadeService::new(db).delete_user(leaving.id).await?;

    assert_eq!(report.trips_deleted, 2);
    assert_eq!(report.reservations_deleted, 4);
    assert_eq!(report.notifications_sent, 4);

    let notifications = NotificationRepository::new(db);
    for passenger in &passengers {
        let received = notifications.find_by_recipient(passenger.id).await?;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, NotificationKind::Cancellation);
        assert_eq!(received[0].reservation_id, None);
    }

    Ok(())
}
