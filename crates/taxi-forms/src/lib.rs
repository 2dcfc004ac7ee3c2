//! Book-a-Taxi Forms
//!
//! Validation and submission lifecycle for the two user-input forms of the
//! Book-a-Taxi site: ride booking and contact inquiry.
//!
//! ## Architecture
//!
//! - **Domain Layer**: drafts, the per-field error record, the service catalog, events
//! - **Validation**: pure rule sets, `(draft, now) -> errors`
//! - **Controller**: the `Idle -> Error | Success -> Idle` state machine with a
//!   cancellable auto-reset timer
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use taxi_common::SystemClock;
//! use taxi_forms::{BookingController, BookingField, FormsConfig, SubmitOutcome};
//!
//! # async fn run() -> taxi_forms::FormsResult<()> {
//! let booking = BookingController::new(Arc::new(SystemClock), &FormsConfig::default());
//! booking.edit(BookingField::PassengerName, "Jane Doe")?;
//! match booking.submit()? {
//!     SubmitOutcome::Accepted(submission) => println!("booked {}", submission.id),
//!     SubmitOutcome::Rejected(errors) => println!("{} field(s) need attention", errors.len()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod domain;
pub mod form;
pub mod validation;

pub use config::{FormSettings, FormsConfig};
pub use controller::{
    BookingController, ContactController, FormState, FormView, SubmissionController,
    SubmissionStatus, SubmitOutcome,
};
pub use domain::catalog::{ContactChannel, ServiceListing, ServiceTier, CONTACT_CHANNELS, SERVICES, SERVICE_TIERS};
pub use domain::draft::{BookingDraft, ContactDraft, Draft};
pub use domain::errors::FieldErrors;
pub use domain::events::{FormEvent, Submission};
pub use domain::fields::{BookingField, ContactField, FieldName, FormKind};
pub use form::{BookingForm, ContactForm, FormSpec};

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("Unknown {form} field: {name}")]
    UnknownField { form: FormKind, name: String },

    #[error("Form is showing its confirmation and cannot be edited")]
    NotEditable,

    #[error("No async runtime available to schedule the form reset")]
    NoRuntime,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type FormsResult<T> = std::result::Result<T, FormsError>;
