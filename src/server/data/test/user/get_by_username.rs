use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(User) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.connection().await.unwrap();

    let created = factory::user::UserFactory::new(&db)
        .username("jdoe")
        .email("jdoe@example.com")
        .full_name("John Doe")
        .build()
        .await?;

    let repo = SeaOrmUserRepository::new(db);
    let user = repo.get_by_username("jdoe").await?;

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, "jdoe@example.com");
    assert_eq!(user.full_name, "John Doe");

    Ok(())
}

/// Tests querying for a username nobody has.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_username() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.connection().await.unwrap();

    factory::create_user(&db).await?;

    let repo = SeaOrmUserRepository::new(db);
    let result = repo.get_by_username("nobody").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that lookup failures other than absence are storage errors.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn surfaces_storage_errors() {
    let repo = broken_repository().await;

    let result = repo.get_by_username("jdoe").await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
