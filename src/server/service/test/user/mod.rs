use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::server::{
    data::user::{UserRepository, USER_NOT_FOUND},
    error::{validation::ValidationError, AppError},
    model::user::User,
    service::user::UserService,
};

mod delete;

/// In-memory repository that counts every call reaching storage.
///
/// Follows the repository contract: lookups miss with `NotFound`, and `patch` and
/// `delete` ignore missing rows. Setting `fail` makes every call a storage error.
#[derive(Default)]
struct RecordingRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingRepository {
    fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) as usize;
        Self {
            users: Mutex::new(users),
            next_id: AtomicUsize::new(next_id),
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn touch(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::DbErr(sea_orm::DbErr::Custom(
                "connection reset".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for RecordingRepository {
    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.touch()?;
        Ok(self.snapshot())
    }

    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.touch()?;
        self.snapshot()
            .into_iter()
            .find(|u| u.username == username)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        self.touch()?;
        self.snapshot()
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    async fn post(&self, user: &User) -> Result<i64, AppError> {
        self.touch()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.users.lock().unwrap().push(User {
            id,
            ..user.clone()
        });
        Ok(id)
    }

    async fn patch(&self, user: &User) -> Result<(), AppError> {
        self.touch()?;
        let mut users = self.users.lock().unwrap();
        if let Some(stored) = users.iter_mut().find(|u| u.id == user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.touch()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

fn jdoe() -> User {
    User {
        id: 1,
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        full_name: "John Doe".to_string(),
    }
}

fn service_with(repo: &Arc<RecordingRepository>) -> UserService {
    UserService::new(repo.clone())
}

fn assert_invalid(result: Result<impl std::fmt::Debug, AppError>, expected: ValidationError) {
    match result {
        Err(AppError::InvalidInput(err)) => assert_eq!(err, expected),
        other => panic!("expected InvalidInput({:?}), got {:?}", expected, other),
    }
}
