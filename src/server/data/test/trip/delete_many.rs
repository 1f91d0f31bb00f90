use super::*;

/// Tests deleting a set of trips.
///
/// Expected: Ok with only the listed trips removed
#[tokio::test]
async fn deletes_listed_trips_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db).await?;
    let first = factory::create_trip(db, driver.id).await?;
    let second = factory::create_trip(db, driver.id).await?;
    let kept = factory::create_trip(db, driver.id).await?;

    let repo = TripRepository::new(db);
    let deleted = repo.delete_many(&[first.id, second.id]).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_id(first.id).await?.is_none());
    assert!(repo.find_by_id(kept.id).await?.is_some());
    assert_eq!(repo.delete_many(&[]).await?, 0);

    Ok(())
}
