use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::instrument;
use waitlist_types::{NewWaitlistEntry, WaitlistEntry};

use crate::app_error::AppResult;

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Stores the entry under the next id. Uniqueness check and insert happen
    /// as one step; fails with `AppError::DuplicateEntry` without mutating
    /// anything when the email is already present.
    async fn add_to_waitlist(
        &self,
        entry: NewWaitlistEntry,
        created_at: String,
    ) -> AppResult<WaitlistEntry>;

    async fn get_waitlist_entry_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;

    /// All entries in insertion order.
    async fn get_all_waitlist_entries(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validates an untyped submission, stamps it with the current time and
    /// stores it.
    #[instrument(skip(self, payload))]
    pub async fn join(&self, payload: &Value) -> AppResult<WaitlistEntry> {
        let submission = NewWaitlistEntry::from_json(payload)?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let entry = self.repo.add_to_waitlist(submission, created_at).await?;

        tracing::info!(entry_id = entry.id, updates = entry.updates, "Joined waitlist");
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn list_entries(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.get_all_waitlist_entries().await
    }
}
