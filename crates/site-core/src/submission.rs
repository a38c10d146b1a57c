//! Contact form lifecycle: idle -> submitting -> succeeded/failed.
//!
//! `ContactForm` owns the state and drives a `FormView` around two sequential
//! relay calls. It takes `&self` everywhere so the browser side can share it
//! through an `Rc` and keep it alive across the relay `.await`s without a
//! `RefCell` borrow.

use crate::constants::SUCCESS_REVERT_DELAY;
use crate::payload::{ContactPayload, FormField};
use crate::relay::{EmailRelay, RelayError, RelayTemplates};
use crate::validate::{validate_form, InvalidFields};
use std::cell::Cell;
use std::time::Duration;
use thiserror::Error;

pub const FAILURE_ALERT: &str =
    "Sorry, there was an error submitting your form. Please try again or contact us via WhatsApp.";
pub const PARTIAL_FAILURE_ALERT: &str = "Your confirmation email was sent, but our team could not be notified. Please try again or contact us via WhatsApp.";

/// Relay step of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    Acknowledgment,
    Notification,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitStep),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("form has invalid fields: {0:?}")]
    Invalid(InvalidFields),
    #[error("customer acknowledgment failed: {0}")]
    Acknowledgment(#[source] RelayError),
    #[error("acknowledgment sent but team notification failed: {0}")]
    Notification(#[source] RelayError),
}

impl SubmitError {
    pub fn failed_step(&self) -> Option<SubmitStep> {
        match self {
            SubmitError::Acknowledgment(_) => Some(SubmitStep::Acknowledgment),
            SubmitError::Notification(_) => Some(SubmitStep::Notification),
            _ => None,
        }
    }

    /// The customer got their acknowledgment but the studio never heard.
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self, SubmitError::Notification(_))
    }

    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            SubmitError::Acknowledgment(_) => Some(FAILURE_ALERT),
            SubmitError::Notification(_) => Some(PARTIAL_FAILURE_ALERT),
            _ => None,
        }
    }
}

/// The visible side of the form.
pub trait FormView {
    fn mark_invalid(&self, field: FormField, invalid: bool);
    /// Disable the submit control and show the sending label, or restore it.
    fn set_submitting(&self, submitting: bool);
    /// Hide the form and reveal the success panel.
    fn show_success(&self);
    /// Show the form and hide the success panel.
    fn show_form(&self);
    fn reset_fields(&self);
    /// Blocking user-facing alert.
    fn alert(&self, message: &str);
}

/// Acknowledgment first; the notification only goes out once it succeeded.
pub async fn dispatch<R: EmailRelay>(
    relay: &R,
    templates: &RelayTemplates,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    relay
        .send(templates.acknowledgment, payload)
        .await
        .map_err(SubmitError::Acknowledgment)?;
    log::info!("[form] customer acknowledgment sent");
    relay
        .send(templates.notification, payload)
        .await
        .map_err(SubmitError::Notification)?;
    log::info!("[form] team notification sent");
    Ok(())
}

pub struct ContactForm<R, V> {
    relay: R,
    view: V,
    templates: RelayTemplates,
    state: Cell<SubmissionState>,
}

impl<R: EmailRelay, V: FormView> ContactForm<R, V> {
    pub fn new(relay: R, view: V, templates: RelayTemplates) -> Self {
        Self {
            relay,
            view,
            templates,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    #[inline]
    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Run the form check and flag inputs. Each required input is marked or
    /// cleared; `message` is left alone.
    pub fn check(&self, payload: &ContactPayload) -> InvalidFields {
        let invalid = validate_form(payload);
        for field in FormField::REQUIRED {
            self.view.mark_invalid(field, invalid.contains(&field));
        }
        invalid
    }

    /// Validate, then relay. On success returns the delay after which
    /// `revert` should be called to bring back an empty idle form.
    pub async fn submit(&self, payload: ContactPayload) -> Result<Duration, SubmitError> {
        match self.state.get() {
            SubmissionState::Submitting | SubmissionState::Succeeded => {
                log::warn!("[form] submit ignored while {:?}", self.state.get());
                return Err(SubmitError::Busy);
            }
            SubmissionState::Failed(step) => {
                log::debug!("[form] retry after {:?} failure", step);
                self.state.set(SubmissionState::Idle);
            }
            SubmissionState::Idle => {}
        }

        let invalid = self.check(&payload);
        if !invalid.is_empty() {
            log::info!("[form] not sent, invalid fields: {:?}", invalid);
            return Err(SubmitError::Invalid(invalid));
        }

        self.state.set(SubmissionState::Submitting);
        self.view.set_submitting(true);

        match dispatch(&self.relay, &self.templates, &payload).await {
            Ok(()) => {
                self.state.set(SubmissionState::Succeeded);
                self.view.show_success();
                self.view.reset_fields();
                Ok(SUCCESS_REVERT_DELAY)
            }
            Err(e) => {
                log::error!("[form] {}", e);
                if let Some(step) = e.failed_step() {
                    self.state.set(SubmissionState::Failed(step));
                }
                if let Some(message) = e.alert_message() {
                    self.view.alert(message);
                }
                self.view.set_submitting(false);
                Err(e)
            }
        }
    }

    /// Return from the success panel to an empty idle form. No-op in any
    /// other state.
    pub fn revert(&self) {
        if self.state.get() != SubmissionState::Succeeded {
            return;
        }
        self.state.set(SubmissionState::Idle);
        self.view.show_form();
        self.view.set_submitting(false);
    }
}
