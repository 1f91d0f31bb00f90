use super::*;

/// Tests unread notifications come before read ones.
///
/// Expected: Ok with the unread notification first even though it is older
#[tokio::test]
async fn lists_unread_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let unread = factory::notification::NotificationFactory::new(db, user.id)
        .read(false)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_recipient_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(notifications[0].id, unread.id);
    assert!(!notifications[0].read);

    Ok(())
}

/// Tests that only the recipient's notifications are listed.
///
/// Expected: Ok with zero notifications for a user who received none
#[tokio::test]
async fn excludes_other_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_recipient_paginated(user.id, 0, 10).await?;

    assert!(notifications.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
