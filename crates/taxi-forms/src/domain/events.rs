//! Form events
//!
//! Published by the submission controller so a presentation layer can
//! redraw, including when the auto-reset timer fires on its own.

use super::fields::FormKind;
use chrono::NaiveDateTime;
use serde::Serialize;

/// An accepted submission
#[derive(Clone, Debug, Serialize)]
pub struct Submission {
    pub id: String,
    pub form: FormKind,
    pub submitted_at: NaiveDateTime,
    /// The draft as it was accepted
    pub payload: serde_json::Value,
}

impl Submission {
    pub fn create(form: FormKind, submitted_at: NaiveDateTime, payload: serde_json::Value) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), form, submitted_at, payload }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    Edited { form: FormKind, field: &'static str, cleared_error: bool },
    Rejected { form: FormKind, fields: Vec<&'static str> },
    Submitted { submission: Submission },
    Reset { form: FormKind },
}
