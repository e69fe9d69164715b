use serde::{Deserialize, Serialize};

/// A stored waitlist signup.
///
/// Returned by `POST /api/waitlist` and listed by `GET /api/waitlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    /// Sequential identifier, starting at 1.
    pub id: i32,

    /// Email address, unique across all entries.
    pub email: String,

    /// Optional organization or company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Whether the signup opted in to product updates.
    #[serde(default)]
    pub updates: bool,

    /// Submission time (ISO 8601, UTC, millisecond precision).
    pub created_at: String,
}
