//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use waitlist_types::{NewWaitlistEntry, WaitlistEntry};

pub const TEST_CREATED_AT: &str = "2026-10-17T09:30:00.000Z";

/// Create a validated submission with sensible defaults.
pub fn create_test_submission(overrides: impl FnOnce(&mut NewWaitlistEntry)) -> NewWaitlistEntry {
    let mut submission = NewWaitlistEntry {
        email: "a@x.com".to_string(),
        organization: Some("Org".to_string()),
        updates: true,
    };
    overrides(&mut submission);
    submission
}

/// Create a stored entry with sensible defaults. The `id` is ignored when the
/// entry is seeded through `TestAppStateBuilder`.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 1,
        email: "a@x.com".to_string(),
        organization: Some("Org".to_string()),
        updates: true,
        created_at: TEST_CREATED_AT.to_string(),
    };
    overrides(&mut entry);
    entry
}
