use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change and that an explicit `Some(None)`
/// photo removes the photo.
///
/// Expected: Ok with the new name, unchanged email and no photo
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .photo(Some("photos/1.png".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                photo: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.photo, None);

    Ok(())
}

/// Tests an update with no fields set.
///
/// Expected: Ok with the user unchanged
#[tokio::test]
async fn empty_update_returns_user_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.update(user.id, UpdateUserParam::default()).await?;

    assert_eq!(updated.map(|u| u.name), Some(user.name));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.update(999, UpdateUserParam::default()).await?;

    assert!(updated.is_none());

    Ok(())
}
