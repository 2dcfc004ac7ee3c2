//! Book-a-Taxi Common - Shared primitives for the form core
//!
//! This crate provides the pieces both forms lean on:
//! - A [`Clock`] abstraction so validation never reads wall-clock time ambiently
//! - Value objects for email addresses and phone numbers
//! - Error handling
//!
//! # Architecture
//!
//! - **Value Objects**: Immutable, validated primitives (EmailAddress, PhoneNumber)
//! - **Ports**: The [`Clock`] trait, with a system adapter and a fixed test double

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod domain;

pub use clock::*;
pub use error::*;
pub use domain::*;

/// Calendar date format used by date-picker controls (`2024-06-01`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format used by time-picker controls (`14:05`)
pub const TIME_FORMAT: &str = "%H:%M";

/// Time-of-day format with seconds, accepted from pickers that emit them
pub const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";

/// True when the value has at least one non-whitespace character
#[inline]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
