//! Forms domain model
//!
//! - **Value Objects**: field names, drafts, the error record
//! - **Reference Data**: the read-only service catalog
//! - **Domain Events**: edits, rejections, submissions and resets

pub mod catalog;
pub mod draft;
pub mod errors;
pub mod events;
pub mod fields;
