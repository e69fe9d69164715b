//! Signup form state.
//!
//! Holds the field values a UI binds to, validates them with the shared
//! schema before anything is sent, and allows one submission in flight at a
//! time. Every finished submission yields a [`Toast`] for the UI to show.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use waitlist_types::{FieldError, NewWaitlistEntry, ValidationErrors, WaitlistEntry, is_valid_email};

use crate::client::WaitlistSubmitter;
use crate::error::ClientError;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to join waitlist. Please try again.";

/// Raw field values as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    /// Optional; blank means "not provided".
    pub organization: String,
    pub updates: bool,
}

impl FormFields {
    /// Client-side validation, mirroring the server schema.
    pub fn to_submission(&self) -> Result<NewWaitlistEntry, ValidationErrors> {
        if !is_valid_email(&self.email) {
            return Err(ValidationErrors::new(vec![FieldError::new(
                "email",
                INVALID_EMAIL_MESSAGE,
            )]));
        }

        let organization =
            (!self.organization.trim().is_empty()).then(|| self.organization.clone());

        Ok(NewWaitlistEntry {
            email: self.email.clone(),
            organization,
            updates: self.updates,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// User-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Toast {
    fn joined() -> Self {
        Self {
            variant: ToastVariant::Success,
            title: "Success!".to_string(),
            description: "You've been added to our waitlist!".to_string(),
        }
    }

    fn failed(error: &ClientError) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title: "Error".to_string(),
            description: error
                .server_message()
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored. Fields have been reset.
    Joined { entry: WaitlistEntry, toast: Toast },
    /// The request failed. Fields are untouched.
    Failed { error: ClientError, toast: Toast },
    /// Client-side validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// Another submission is still outstanding; nothing was sent.
    InFlight,
}

/// Clears the pending flag when dropped, including when the submit future is
/// cancelled.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct WaitlistForm<S> {
    submitter: S,
    fields: Mutex<FormFields>,
    pending: AtomicBool,
}

impl<S: WaitlistSubmitter> WaitlistForm<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            fields: Mutex::new(FormFields::default()),
            pending: AtomicBool::new(false),
        }
    }

    fn lock_fields(&self) -> MutexGuard<'_, FormFields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fields(&self) -> FormFields {
        self.lock_fields().clone()
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.lock_fields().email = email.into();
    }

    pub fn set_organization(&self, organization: impl Into<String>) {
        self.lock_fields().organization = organization.into();
    }

    pub fn set_updates(&self, updates: bool) {
        self.lock_fields().updates = updates;
    }

    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && is_valid_email(&self.lock_fields().email)
    }

    /// Validate and send the current fields. At most one request is in flight
    /// per form; concurrent calls return [`SubmitOutcome::InFlight`].
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            return SubmitOutcome::InFlight;
        };

        let submission = match self.fields().to_submission() {
            Ok(submission) => submission,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        match self.submitter.join(&submission).await {
            Ok(entry) => {
                *self.lock_fields() = FormFields::default();
                SubmitOutcome::Joined {
                    entry,
                    toast: Toast::joined(),
                }
            }
            Err(error) => {
                tracing::debug!(error = %error, "Waitlist submission failed");
                let toast = Toast::failed(&error);
                SubmitOutcome::Failed { error, toast }
            }
        }
    }
}
