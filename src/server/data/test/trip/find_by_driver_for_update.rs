use super::*;
use sea_orm::TransactionTrait;

/// Tests locking the trips of one driver inside a transaction.
///
/// Expected: Ok with only that driver's trips, ordered by ID
#[tokio::test]
async fn returns_only_the_drivers_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_trip(db, driver.id).await?;
    factory::create_trip(db, other.id).await?;
    let second = factory::create_trip(db, driver.id).await?;

    let txn = db.begin().await?;
    let trips = TripRepository::new(&txn)
        .find_by_driver_for_update(driver.id)
        .await?;
    txn.commit().await?;

    let ids: Vec<i32> = trips.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let none = TripRepository::new(db)
        .find_by_driver_for_update(999)
        .await?;
    assert!(none.is_empty());

    Ok(())
}
