//! Book-a-Taxi Domain Primitives
//!
//! Self-validating value objects shared by the booking and contact forms.

pub mod value_objects;

pub use value_objects::*;
