use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with the row gone afterwards
#[tokio::test]
async fn deletes_existing_user() -> Result<(), AppError> {
    let repo = repository().await;
    let id = repo.post(&new_user("jdoe", "jdoe@example.com", "")).await?;

    repo.delete(id).await?;

    assert!(matches!(repo.get_by_id(id).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting the same id twice.
///
/// Expected: Ok(()) both times
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let repo = repository().await;
    let id = repo.post(&new_user("jdoe", "jdoe@example.com", "")).await?;

    repo.delete(id).await?;
    repo.delete(id).await?;

    Ok(())
}

/// Tests that delete failures are storage errors.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn surfaces_storage_errors() {
    let repo = broken_repository().await;

    let result = repo.delete(1).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
