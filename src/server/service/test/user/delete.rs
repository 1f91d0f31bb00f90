use super::*;

/// Tests an administrator deleting their own account through the admin path.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn admin_cannot_delete_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = caller(factory::user::create_admin(db).await?);

    let result = UserService::new(db).delete_by_admin(admin.id, &admin).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests an administrator deleting another account.
///
/// Expected: Ok and the account is gone
#[tokio::test]
async fn admin_deletes_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = caller(factory::user::create_admin(db).await?);
    let target = factory::create_user(db).await?;

    let service = UserService::new(db);
    service.delete_by_admin(target.id, &admin).await?;

    let result = service.get_by_id(target.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a user deleting their own account.
///
/// Expected: Ok and the account is gone
#[tokio::test]
async fn user_deletes_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = caller(factory::create_user(db).await?);

    let service = UserService::new(db);
    service.delete_self(&user).await?;

    assert!(matches!(
        service.get_by_id(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
