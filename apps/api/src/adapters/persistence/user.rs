use async_trait::async_trait;

use super::take_id;
use crate::{
    adapters::persistence::MemoryPersistence,
    app_error::{AppError, AppResult},
    domain::entities::user::{NewUser, User},
    use_cases::user::UserRepo,
};

#[async_trait]
impl UserRepo for MemoryPersistence {
    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.tables()?;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(AppError::UsernameTaken);
        }

        let id = take_id(&mut tables.next_user_id, "user")?;
        let stored = User {
            id,
            username: user.username,
            password: user.password,
        };
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.tables()?.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .tables()?
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}
