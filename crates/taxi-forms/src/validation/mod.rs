//! Request validators
//!
//! Pure rule sets: a draft and the current time in, an error record out.
//! Every field is checked independently and every problem is reported at
//! once; nothing short-circuits on the first failure.

pub mod booking;
pub mod contact;

pub use booking::{min_selectable_date, validate_booking};
pub use contact::validate_contact;
