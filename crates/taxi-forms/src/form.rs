//! Form definitions
//!
//! Binds each form's draft, field set, rule set and confirmation copy so
//! one submission controller can drive either form.

use crate::domain::draft::{BookingDraft, ContactDraft, Draft};
use crate::domain::errors::FieldErrors;
use crate::domain::fields::{BookingField, ContactField, FieldName, FormKind};
use crate::validation::{validate_booking, validate_contact};
use chrono::NaiveDateTime;

/// A form the submission controller can drive
pub trait FormSpec: Send + Sync + 'static {
    type Field: FieldName;
    type Draft: Draft<Field = Self::Field>;

    const KIND: FormKind;

    /// How long the confirmation stays up before the form returns to idle
    const DEFAULT_RESET_DELAY_MS: u64;

    /// Confirmation copy shown in place of the form after a submission
    const CONFIRMATION: &'static [&'static str];

    /// Run the full rule set
    fn validate(draft: &Self::Draft, now: NaiveDateTime) -> FieldErrors<Self::Field>;
}

/// Ride booking
#[derive(Debug, Clone, Copy)]
pub struct BookingForm;

impl FormSpec for BookingForm {
    type Field = BookingField;
    type Draft = BookingDraft;

    const KIND: FormKind = FormKind::Booking;
    const DEFAULT_RESET_DELAY_MS: u64 = 3_000;
    const CONFIRMATION: &'static [&'static str] = &[
        "✓ Booking Confirmed!",
        "Your ride has been booked successfully. A driver will be assigned shortly.",
        "Check your email and SMS for booking details.",
    ];

    fn validate(draft: &BookingDraft, now: NaiveDateTime) -> FieldErrors<BookingField> {
        validate_booking(draft, now)
    }
}

/// Contact inquiry
#[derive(Debug, Clone, Copy)]
pub struct ContactForm;

impl FormSpec for ContactForm {
    type Field = ContactField;
    type Draft = ContactDraft;

    const KIND: FormKind = FormKind::Contact;
    const DEFAULT_RESET_DELAY_MS: u64 = 5_000;
    const CONFIRMATION: &'static [&'static str] =
        &["✓ Thank you for contacting us! We'll get back to you soon."];

    fn validate(draft: &ContactDraft, _now: NaiveDateTime) -> FieldErrors<ContactField> {
        validate_contact(draft)
    }
}
