use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with the `user` role
#[tokio::test]
async fn registers_with_user_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .register(register_param("camille@example.com"))
        .await?;

    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.email, "camille@example.com");

    Ok(())
}

/// Tests registering twice with the same email.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.register(register_param("dup@example.com")).await?;
    let result = service.register(register_param("dup@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests rejecting malformed registration fields.
///
/// Expected: Err(BadRequest) for a blank name, a malformed email and an empty hash
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_carpool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let invalid = [
        RegisterUserParam {
            name: " ".to_string(),
            ..register_param("a@example.com")
        },
        register_param("not-an-email"),
        RegisterUserParam {
            credential_hash: String::new(),
            ..register_param("b@example.com")
        },
    ];

    for param in invalid {
        let result = service.register(param).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
