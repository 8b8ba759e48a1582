use super::*;

/// Tests inserting a user and reading it back.
///
/// Expected: Ok(id) where the stored row equals the input with that id
#[tokio::test]
async fn inserts_and_returns_assigned_id() -> Result<(), AppError> {
    let repo = repository().await;
    let user = new_user("jdoe", "jdoe@example.com", "John Doe");

    let id = repo.post(&user).await?;

    assert!(id >= 1);
    let stored = repo.get_by_id(id).await?;
    assert_eq!(stored, User { id, ..user });

    Ok(())
}

/// Tests that a caller-supplied id is ignored.
///
/// Expected: Ok with the store's id, not the one on the input
#[tokio::test]
async fn ignores_caller_supplied_id() -> Result<(), AppError> {
    let repo = repository().await;
    let mut user = new_user("jdoe", "jdoe@example.com", "John Doe");
    user.id = 500;

    let id = repo.post(&user).await?;

    assert_ne!(id, 500);
    assert!(matches!(repo.get_by_id(500).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that ids increase with each insert.
///
/// Expected: Ok with strictly increasing ids
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), AppError> {
    let repo = repository().await;

    let first = repo.post(&new_user("jdoe", "jdoe@example.com", "")).await?;
    let second = repo.post(&new_user("asmith", "asmith@example.com", "")).await?;

    assert!(second > first);

    Ok(())
}

/// Tests that insert failures are storage errors.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn surfaces_storage_errors() {
    let repo = broken_repository().await;

    let result = repo.post(&new_user("jdoe", "jdoe@example.com", "")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
