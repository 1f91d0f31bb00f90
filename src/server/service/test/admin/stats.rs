use super::*;

/// Tests platform counters over a small data set.
///
/// Expected: Ok with users, trips, reservations per status and unread notifications
#[tokio::test]
async fn counts_everything() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip) = factory::helpers::create_trip_with_driver(db).await?;
    for status in [
        ReservationStatus::Pending,
        ReservationStatus::Accepted,
        ReservationStatus::Accepted,
        ReservationStatus::Cancelled,
    ] {
        factory::helpers::create_passenger_with_reservation(db, trip.id, status).await?;
    }
    factory::create_notification(db, driver.id).await?;
    factory::notification::NotificationFactory::new(db, driver.id)
        .read(true)
        .build()
        .await?;

    let stats = AdminService::new(db).stats().await?;

    assert_eq!(stats.users, 5);
    assert_eq!(stats.trips, 1);
    assert_eq!(stats.reservations_pending, 1);
    assert_eq!(stats.reservations_accepted, 2);
    assert_eq!(stats.reservations_refused, 0);
    assert_eq!(stats.reservations_cancelled, 1);
    assert_eq!(stats.unread_notifications, 1);

    Ok(())
}
