use super::*;

/// Tests that search listings carry live accepted counts per trip.
///
/// Expected: Ok with each listing's availability derived from its own reservations
#[tokio::test]
async fn listings_include_availability() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db).await?;
    let busy = factory::trip::TripFactory::new(db, driver.id)
        .origin("Paris")
        .seats(2)
        .departure_at(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let quiet = factory::trip::TripFactory::new(db, driver.id)
        .origin("Paris")
        .seats(2)
        .departure_at(Utc::now() + Duration::days(3))
        .build()
        .await?;
    factory::helpers::create_passenger_with_reservation(db, busy.id, ReservationStatus::Accepted)
        .await?;

    let filter = TripFilter {
        origin: Some("Paris".to_string()),
        ..Default::default()
    };
    let page = TripService::new(db).search(filter, 0, 10).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].trip.id, busy.id);
    assert_eq!(page.items[0].accepted_count, 1);
    assert_eq!(page.items[1].trip.id, quiet.id);
    assert_eq!(page.items[1].accepted_count, 0);

    Ok(())
}
