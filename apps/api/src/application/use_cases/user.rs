use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    domain::entities::user::{NewUser, User},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Fails with `AppError::UsernameTaken` if the username is already stored.
    async fn create_user(&self, user: NewUser) -> AppResult<User>;
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
