use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use waitlist_types::WaitlistEntry;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::user::User,
};

pub mod user;
pub mod waitlist;

/// Both collections and their id counters. Ids increase monotonically, so
/// iterating a `BTreeMap` keyed by id yields insertion order.
struct Tables {
    users: BTreeMap<i32, User>,
    waitlist: BTreeMap<i32, WaitlistEntry>,
    next_user_id: i32,
    next_waitlist_id: i32,
}

impl Tables {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            waitlist: BTreeMap::new(),
            next_user_id: 1,
            next_waitlist_id: 1,
        }
    }
}

/// Process-lifetime storage for users and waitlist entries.
///
/// Every operation runs under one lock, so a uniqueness check and the insert
/// that follows it cannot interleave with another writer.
pub struct MemoryPersistence {
    tables: Mutex<Tables>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        MemoryPersistence {
            tables: Mutex::new(Tables::new()),
        }
    }

    /// Storage pre-filled with `entries`, ids reassigned in order.
    #[cfg(test)]
    pub(crate) fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let mut tables = Tables::new();
        for mut entry in entries {
            entry.id = tables.next_waitlist_id;
            tables.next_waitlist_id += 1;
            tables.waitlist.insert(entry.id, entry);
        }
        MemoryPersistence {
            tables: Mutex::new(tables),
        }
    }

    fn tables(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| {
            tracing::error!("Storage lock poisoned");
            AppError::Internal("Storage unavailable".into())
        })
    }
}

impl Default for MemoryPersistence {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out `*counter` and advances it.
fn take_id(counter: &mut i32, collection: &str) -> AppResult<i32> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or_else(|| AppError::Internal(format!("{collection} id space exhausted")))?;
    Ok(id)
}
