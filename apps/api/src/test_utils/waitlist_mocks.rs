//! Stub repositories for driving error paths.

use async_trait::async_trait;
use waitlist_types::{NewWaitlistEntry, WaitlistEntry};

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::WaitlistRepo,
};

/// Waitlist repo whose every call fails with `AppError::Internal`.
pub struct FailingWaitlistRepo {
    message: String,
}

impl FailingWaitlistRepo {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> AppResult<T> {
        Err(AppError::Internal(self.message.clone()))
    }
}

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn add_to_waitlist(
        &self,
        _entry: NewWaitlistEntry,
        _created_at: String,
    ) -> AppResult<WaitlistEntry> {
        self.fail()
    }

    async fn get_waitlist_entry_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        self.fail()
    }

    async fn get_all_waitlist_entries(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.fail()
    }
}
