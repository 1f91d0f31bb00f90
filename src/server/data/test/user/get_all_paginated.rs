use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested slice along with the total
/// number of users.
///
/// Expected: Ok with 2 users on each full page and a total of 5
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests users are ordered alphabetically by name.
///
/// Expected: Ok with users sorted by name
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Zoé").build().await?;
    factory::user::UserFactory::new(db).name("Alix").build().await?;
    factory::user::UserFactory::new(db).name("Malo").build().await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(0, 10).await?;
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();

    assert_eq!(names, vec!["Alix", "Malo", "Zoé"]);

    Ok(())
}
