use async_trait::async_trait;
use waitlist_types::{NewWaitlistEntry, WaitlistEntry};

use super::take_id;
use crate::{
    adapters::persistence::MemoryPersistence,
    app_error::{AppError, AppResult},
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for MemoryPersistence {
    async fn add_to_waitlist(
        &self,
        entry: NewWaitlistEntry,
        created_at: String,
    ) -> AppResult<WaitlistEntry> {
        let mut tables = self.tables()?;

        if tables.waitlist.values().any(|e| e.email == entry.email) {
            return Err(AppError::DuplicateEntry);
        }

        let id = take_id(&mut tables.next_waitlist_id, "waitlist")?;
        let stored = WaitlistEntry {
            id,
            email: entry.email,
            organization: entry.organization,
            updates: entry.updates,
            created_at,
        };
        tables.waitlist.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_waitlist_entry_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self
            .tables()?
            .waitlist
            .values()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn get_all_waitlist_entries(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.tables()?.waitlist.values().cloned().collect())
    }
}
