use super::*;

/// Tests deleting the notifications linked to a set of reservations.
///
/// Expected: Ok(1) with unlinked notifications and other links untouched
#[tokio::test]
async fn deletes_only_linked_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let (_, doomed) = factory::helpers::create_passenger_with_reservation(
        db,
        trip.id,
        entity::reservation::ReservationStatus::Pending,
    )
    .await?;
    let (_, kept) = factory::helpers::create_passenger_with_reservation(
        db,
        trip.id,
        entity::reservation::ReservationStatus::Pending,
    )
    .await?;

    factory::notification::NotificationFactory::new(db, driver.id)
        .reservation_id(Some(doomed.id))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, driver.id)
        .reservation_id(Some(kept.id))
        .build()
        .await?;
    factory::create_notification(db, driver.id).await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo.delete_by_reservations(&[doomed.id]).await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.find_by_recipient(driver.id).await?.len(), 2);

    Ok(())
}
