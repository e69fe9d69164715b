//! Client for the waitlist API.
//!
//! # Features
//!
//! - **HTTP client** - Submit signups and list entries over `/api/waitlist`
//! - **Signup form** - Field state, client-side validation with the shared
//!   schema, single in-flight submission and toast notifications
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_client::{SubmitOutcome, WaitlistClient, WaitlistConfig, WaitlistForm};
//!
//! let client = WaitlistClient::new(WaitlistConfig {
//!     base_url: "http://localhost:5000".to_string(),
//! })?;
//! let form = WaitlistForm::new(client);
//! form.set_email("you@example.com");
//!
//! if let SubmitOutcome::Joined { toast, .. } = form.submit().await {
//!     println!("{}", toast.description);
//! }
//! ```

mod client;
mod error;
mod form;

pub use client::{WaitlistClient, WaitlistConfig, WaitlistSubmitter};
pub use error::ClientError;
pub use form::{
    FALLBACK_ERROR_MESSAGE, FormFields, INVALID_EMAIL_MESSAGE, SubmitOutcome, Toast, ToastVariant,
    WaitlistForm,
};

// Re-export shared types for convenience
pub use waitlist_types::{NewWaitlistEntry, ValidationErrors, WaitlistEntry};
