use super::*;

/// Tests a user updating their own profile.
///
/// Expected: Ok with the new name and the photo removed
#[tokio::test]
async fn updates_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .photo(Some("avatar.png".to_string()))
        .build()
        .await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            &caller(user.clone()),
            UpdateUserParam {
                name: Some("Dominique".to_string()),
                photo: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Dominique");
    assert_eq!(updated.photo, None);

    Ok(())
}

/// Tests a non-admin changing their own role.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_role_change_by_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            &caller(user.clone()),
            UpdateUserParam {
                role: Some(UserRole::Admin),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests updating another user's profile.
///
/// Expected: Err(Forbidden) for a regular user, Ok for an administrator
#[tokio::test]
async fn only_admin_updates_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = UserService::new(db);
    let rename = || UpdateUserParam {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };

    let result = service.update(target.id, &caller(other), rename()).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let updated = service.update(target.id, &caller(admin), rename()).await?;
    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests taking an email already used by another account.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            &caller(user.clone()),
            UpdateUserParam {
                email: Some(taken.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests promoting a user.
///
/// Expected: Ok with the `admin` role
#[tokio::test]
async fn set_role_promotes_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let promoted = UserService::new(db).set_role(user.id, UserRole::Admin).await?;

    assert!(promoted.is_admin());

    Ok(())
}
