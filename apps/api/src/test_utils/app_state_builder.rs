//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by in-memory storage (or a failing stub) for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use waitlist_types::WaitlistEntry;

use crate::{
    adapters::{http::app_state::AppState, persistence::MemoryPersistence},
    infra::config::AppConfig,
    test_utils::FailingWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` with test dependencies.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@x.com".to_string()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    failing_storage: Option<String>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            failing_storage: None,
        }
    }

    /// Seed an entry. Ids are reassigned in seeding order.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replace storage with a stub that fails every call with `message`.
    pub fn with_failing_storage(mut self, message: &str) -> Self {
        self.failing_storage = Some(message.to_string());
        self
    }

    pub fn build(self) -> AppState {
        let repo: Arc<dyn WaitlistRepo> = match self.failing_storage {
            Some(message) => Arc::new(FailingWaitlistRepo::new(&message)),
            None => Arc::new(MemoryPersistence::with_entries(self.entries)),
        };

        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:5000".parse::<SocketAddr>().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:5173"),
            log_filter: "waitlist_api=debug".to_string(),
            log_file: None,
        });

        AppState {
            config,
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
