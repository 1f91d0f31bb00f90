use super::*;

/// Tests an administrator recording a generic notification.
///
/// Expected: Ok with an unread notification
#[tokio::test]
async fn records_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let created = NotificationService::new(db)
        .create(NewNotification::new(
            user.id,
            NotificationKind::Generic,
            "Maintenance tonight",
        ))
        .await?;

    assert_eq!(created.recipient_id, user.id);
    assert!(!created.read);

    Ok(())
}

/// Tests recording a notification for missing targets.
///
/// Expected: Err(NotFound) for an unknown recipient and an unknown reservation
#[tokio::test]
async fn rejects_missing_targets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = NotificationService::new(db);

    let result = service
        .create(NewNotification::new(999, NotificationKind::Generic, "Hello"))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .create(
            NewNotification::new(user.id, NotificationKind::Generic, "Hello").for_reservation(42),
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests recording an empty message.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = NotificationService::new(db)
        .create(NewNotification::new(user.id, NotificationKind::Generic, "   "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
