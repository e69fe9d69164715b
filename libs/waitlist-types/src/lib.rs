//! Shared types for the waitlist service.
//!
//! This crate provides:
//! - The submission schema (`NewWaitlistEntry`) and its validation rules
//! - The stored entry shape (`WaitlistEntry`)
//! - The JSON response envelope used by every endpoint (`ApiResponse`)

mod entry;
mod envelope;
mod schema;

pub use entry::WaitlistEntry;
pub use envelope::ApiResponse;
pub use schema::{FieldError, NewWaitlistEntry, ValidationErrors, is_valid_email};
