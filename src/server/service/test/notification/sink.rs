use super::*;
use sea_orm::TransactionTrait;

/// Tests that a failed emission is swallowed.
///
/// The notification table is missing so the insert fails.
///
/// Expected: `None` and zero for batches
#[tokio::test]
async fn failed_emission_is_swallowed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sink = NotificationSink::new(db);

    let single = sink
        .notify(NewNotification::new(user.id, NotificationKind::Generic, "Hi"))
        .await;
    assert!(single.is_none());

    let sent = sink
        .notify_many(vec![NewNotification::new(
            user.id,
            NotificationKind::Generic,
            "Hi",
        )])
        .await;
    assert_eq!(sent, 0);

    Ok(())
}

/// Tests batch emission.
///
/// Expected: every notification recorded and counted
#[tokio::test]
async fn notify_many_records_all() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let sent = NotificationSink::new(db)
        .notify_many(vec![
            NewNotification::new(user.id, NotificationKind::Generic, "One"),
            NewNotification::new(user.id, NotificationKind::Generic, "Two"),
        ])
        .await;

    assert_eq!(sent, 2);
    assert_eq!(
        NotificationRepository::new(db)
            .find_by_recipient(user.id)
            .await?
            .len(),
        2
    );

    Ok(())
}

/// Tests that one failing notification does not drop the rest of a batch.
///
/// The middle notification links a reservation that does not exist. The batch runs
/// inside an open transaction like the cascade coordinator's.
///
/// Expected: the two valid notifications recorded and kept after commit
#[tokio::test]
async fn notify_many_skips_failed_notice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let txn = db.begin().await?;
    let sent = NotificationSink::new(&txn)
        .notify_many(vec![
            NewNotification::new(user.id, NotificationKind::Cancellation, "One"),
            NewNotification::new(user.id, NotificationKind::Cancellation, "Broken")
                .for_reservation(999),
            NewNotification::new(user.id, NotificationKind::Cancellation, "Three"),
        ])
        .await;
    txn.commit().await?;

    assert_eq!(sent, 2);
    let stored = NotificationRepository::new(db)
        .find_by_recipient(user.id)
        .await?;
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|n| n.message != "Broken"));

    Ok(())
}
