use super::*;

/// Tests loading a trip together with its driver.
///
/// Expected: Ok(Some) with the driver matching the trip owner
#[tokio::test]
async fn returns_trip_and_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, trip) = factory::helpers::create_trip_with_driver(db).await?;

    let repo = TripRepository::new(db);
    let (found, found_driver) = repo.find_with_driver(trip.id).await?.unwrap();

    assert_eq!(found.id, trip.id);
    assert_eq!(found_driver.id, driver.id);

    Ok(())
}

/// Tests loading a trip that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);

    assert!(repo.find_with_driver(42).await?.is_none());
    assert!(repo.find_by_id_for_update(42).await?.is_none());

    Ok(())
}
