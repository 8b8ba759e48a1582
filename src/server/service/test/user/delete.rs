use super::*;

/// Tests deleting twice succeeds both times.
///
/// Expected: Ok(()) twice and the user gone
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let repo = Arc::new(RecordingRepository::with_users(vec![jdoe()]));
    let service = service_with(&repo);

    service.delete(1).await?;
    service.delete(1).await?;

    assert!(repo.snapshot().is_empty());
    assert_eq!(repo.calls(), 2);

    Ok(())
}

/// Tests ids below 1 never reach storage.
///
/// Expected: Err(InvalidId) with zero storage calls
#[tokio::test]
async fn rejects_non_positive_id_before_storage() {
    let repo = Arc::new(RecordingRepository::with_users(vec![jdoe()]));
    let service = service_with(&repo);

    assert_invalid(service.delete(0).await, ValidationError::InvalidId);
    assert_eq!(repo.calls(), 0);
    assert_eq!(repo.snapshot(), vec![jdoe()]);
}
