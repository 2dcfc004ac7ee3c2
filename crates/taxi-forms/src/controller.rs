//! Submission controller
//!
//! State machine governing one form instance:
//!
//! ```text
//!   Idle --submit(errors)--> Error --edit--> Error (one entry cleared)
//!   Idle|Error --submit(ok)--> Success --reset delay--> Idle
//! ```
//!
//! Entering `Success` clears the draft and schedules the return to `Idle` as
//! a tokio task guarded by a [`CancellationToken`]. Tearing the controller
//! down cancels the token, so a reset never lands on a form that is gone.

use crate::config::FormsConfig;
use crate::domain::draft::Draft;
use crate::domain::errors::FieldErrors;
use crate::domain::events::{FormEvent, Submission};
use crate::domain::fields::{FieldName, FormKind};
use crate::form::{BookingForm, ContactForm, FormSpec};
use crate::{FormsError, FormsResult};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use taxi_common::Clock;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub type BookingController = SubmissionController<BookingForm>;
pub type ContactController = SubmissionController<ContactForm>;

/// Whether the last submission was accepted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Editing; may still carry errors from a rejected submit
    #[default]
    Idle,
    Succeeded,
}

/// What the presentation layer should display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Editing, no feedback shown
    Idle,
    /// Validation failed, per-field messages visible
    Error,
    /// Confirmation shown in place of the inputs
    Success,
}

/// Result of a submit
#[derive(Clone, Debug)]
pub enum SubmitOutcome<K: FieldName> {
    Accepted(Submission),
    Rejected(FieldErrors<K>),
}

impl<K: FieldName> SubmitOutcome<K> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Snapshot of everything a view renders
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct FormView<F: FormSpec> {
    pub form: FormKind,
    pub state: FormState,
    pub draft: F::Draft,
    pub errors: FieldErrors<F::Field>,
    /// Confirmation copy, only while in `Success`
    pub confirmation: Option<&'static [&'static str]>,
}

struct Session<F: FormSpec> {
    draft: F::Draft,
    errors: FieldErrors<F::Field>,
    status: SubmissionStatus,
}

impl<F: FormSpec> Session<F> {
    fn new() -> Self {
        Self {
            draft: F::Draft::default(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    fn state(&self) -> FormState {
        match self.status {
            SubmissionStatus::Succeeded => FormState::Success,
            SubmissionStatus::Idle if self.errors.is_empty() => FormState::Idle,
            SubmissionStatus::Idle => FormState::Error,
        }
    }

    fn ensure_editable(&self) -> FormsResult<()> {
        match self.status {
            SubmissionStatus::Succeeded => Err(FormsError::NotEditable),
            SubmissionStatus::Idle => Ok(()),
        }
    }
}

/// Drives one form instance through its submission lifecycle
pub struct SubmissionController<F: FormSpec> {
    session: Arc<RwLock<Session<F>>>,
    clock: Arc<dyn Clock>,
    reset_delay: Duration,
    pending_reset: Mutex<Option<CancellationToken>>,
    event_tx: broadcast::Sender<FormEvent>,
}

impl<F: FormSpec> SubmissionController<F> {
    /// Create a controller with an empty draft
    pub fn new(clock: Arc<dyn Clock>, config: &FormsConfig) -> Self {
        Self::with_reset_delay(clock, config.reset_delay(F::KIND))
    }

    pub fn with_reset_delay(clock: Arc<dyn Clock>, reset_delay: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            clock,
            reset_delay,
            pending_reset: Mutex::new(None),
            event_tx,
        }
    }

    // -------------------------------------------------------------------------
    // Input events
    // -------------------------------------------------------------------------

    /// Update one field and eagerly drop that field's error, if any
    ///
    /// Does not re-run validation.
    pub fn edit(&self, field: F::Field, value: impl Into<String>) -> FormsResult<()> {
        let cleared_error = {
            let mut session = self.session.write();
            session.ensure_editable()?;
            session.draft.set(field, value.into());
            session.errors.clear_field(field)
        };

        debug!(form = %F::KIND, field = field.as_str(), cleared_error, "field edited");
        self.emit(FormEvent::Edited { form: F::KIND, field: field.as_str(), cleared_error });
        Ok(())
    }

    /// Update a field addressed by its wire name
    pub fn edit_named(&self, name: &str, value: impl Into<String>) -> FormsResult<()> {
        let field: F::Field = name.parse()?;
        self.edit(field, value)
    }

    /// Validate the draft and either accept it or surface per-field errors
    ///
    /// On acceptance the draft is cleared and the return to `Idle` is
    /// scheduled; on rejection the draft is left for in-place correction.
    pub fn submit(&self) -> FormsResult<SubmitOutcome<F::Field>> {
        let now = self.clock.now();
        let mut session = self.session.write();
        session.ensure_editable()?;

        let errors = Self::revalidate(&mut session, now);
        if !errors.is_empty() {
            drop(session);
            let fields: Vec<&'static str> = errors.iter().map(|(f, _)| f.as_str()).collect();
            warn!(form = %F::KIND, ?fields, "submission rejected");
            self.emit(FormEvent::Rejected { form: F::KIND, fields });
            return Ok(SubmitOutcome::Rejected(errors));
        }

        // Resolve the runtime before touching state so a failure leaves the draft intact.
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| FormsError::NoRuntime)?;
        let payload = serde_json::to_value(&session.draft)?;

        session.draft = F::Draft::default();
        session.errors.clear();
        session.status = SubmissionStatus::Succeeded;
        drop(session);

        let submission = Submission::create(F::KIND, now, payload);
        info!(
            form = %F::KIND,
            submission_id = %submission.id,
            payload = %submission.payload,
            "submission accepted"
        );

        self.schedule_reset(&runtime);
        self.emit(FormEvent::Submitted { submission: submission.clone() });
        Ok(SubmitOutcome::Accepted(submission))
    }

    // -------------------------------------------------------------------------
    // Error record operations
    // -------------------------------------------------------------------------

    /// Drop one field's error entry; returns whether one was present
    pub fn clear_field_error(&self, field: F::Field) -> bool {
        self.session.write().errors.clear_field(field)
    }

    /// Replace the whole error record with a fresh validation of the draft
    pub fn revalidate_all(&self) -> FormsResult<FieldErrors<F::Field>> {
        let now = self.clock.now();
        let mut session = self.session.write();
        session.ensure_editable()?;
        Ok(Self::revalidate(&mut session, now))
    }

    fn revalidate(session: &mut Session<F>, now: chrono::NaiveDateTime) -> FieldErrors<F::Field> {
        let errors = F::validate(&session.draft, now);
        session.errors = errors.clone();
        errors
    }

    // -------------------------------------------------------------------------
    // Auto-reset
    // -------------------------------------------------------------------------

    fn schedule_reset(&self, runtime: &tokio::runtime::Handle) {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending_reset.lock().replace(token.clone()) {
            previous.cancel();
        }

        let session = Arc::clone(&self.session);
        let event_tx = self.event_tx.clone();
        let delay = self.reset_delay;
        let cancelled = token.clone();

        runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(form = %F::KIND, "form reset cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    {
                        let mut session = session.write();
                        session.draft = F::Draft::default();
                        session.errors.clear();
                        session.status = SubmissionStatus::Idle;
                    }
                    // Spent; teardown must not report it as pending.
                    token.cancel();
                    info!(form = %F::KIND, "form reset");
                    let _ = event_tx.send(FormEvent::Reset { form: F::KIND });
                }
            }
        });
    }

    /// Cancel a pending auto-reset
    ///
    /// Called automatically on drop. Returns whether a reset was pending.
    pub fn teardown(&self) -> bool {
        match self.pending_reset.lock().take() {
            Some(token) => {
                let pending = !token.is_cancelled();
                token.cancel();
                pending
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    pub fn state(&self) -> FormState {
        self.session.read().state()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.session.read().status
    }

    pub fn draft(&self) -> F::Draft {
        self.session.read().draft.clone()
    }

    pub fn errors(&self) -> FieldErrors<F::Field> {
        self.session.read().errors.clone()
    }

    pub fn view(&self) -> FormView<F> {
        let session = self.session.read();
        let state = session.state();
        FormView {
            form: F::KIND,
            state,
            draft: session.draft.clone(),
            errors: session.errors.clone(),
            confirmation: (state == FormState::Success).then_some(F::CONFIRMATION),
        }
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Subscribe to form events
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: FormEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl<F: FormSpec> Drop for SubmissionController<F> {
    fn drop(&mut self) {
        if self.teardown() {
            debug!(form = %F::KIND, "controller dropped with a pending reset");
        }
    }
}
