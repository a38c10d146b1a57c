// Host-side tests for the contact form submission workflow.
// Relay and view are recorded in memory; async steps run on pollster.

use site_core::constants::SUCCESS_REVERT_DELAY;
use site_core::{
    dispatch, ContactForm, ContactPayload, EmailRelay, FormField, FormView, RelayError,
    RelayTemplates, SubmissionState, SubmitError, SubmitStep, FAILURE_ALERT,
    PARTIAL_FAILURE_ALERT,
};
use std::cell::{Cell, RefCell};

const TEMPLATES: RelayTemplates = RelayTemplates {
    acknowledgment: "ack",
    notification: "notify",
};

#[derive(Default)]
struct ScriptedRelay {
    fail_ack: bool,
    fail_notify: bool,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRelay {
    fn failing(ack: bool, notify: bool) -> Self {
        Self {
            fail_ack: ack,
            fail_notify: notify,
            ..Default::default()
        }
    }

    fn count(&self, template: &str) -> usize {
        self.calls.borrow().iter().filter(|t| *t == template).count()
    }
}

impl EmailRelay for ScriptedRelay {
    async fn send(&self, template_id: &str, _payload: &ContactPayload) -> Result<(), RelayError> {
        self.calls.borrow_mut().push(template_id.to_string());
        let fail = match template_id {
            "ack" => self.fail_ack,
            _ => self.fail_notify,
        };
        if fail {
            Err(RelayError::Rejected {
                status: 400,
                body: "template error".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct RecordingView {
    invalid: RefCell<Vec<FormField>>,
    submitting: Cell<bool>,
    form_hidden: Cell<bool>,
    success_shown: Cell<bool>,
    fields_cleared: Cell<usize>,
    alerts: RefCell<Vec<String>>,
}

impl FormView for RecordingView {
    fn mark_invalid(&self, field: FormField, invalid: bool) {
        let mut marks = self.invalid.borrow_mut();
        marks.retain(|f| *f != field);
        if invalid {
            marks.push(field);
        }
    }
    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }
    fn show_success(&self) {
        self.form_hidden.set(true);
        self.success_shown.set(true);
    }
    fn show_form(&self) {
        self.form_hidden.set(false);
        self.success_shown.set(false);
    }
    fn reset_fields(&self) {
        self.fields_cleared.set(self.fields_cleared.get() + 1);
    }
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone: "(555) 010-2030".into(),
        project_type: "webapp".into(),
        message: "Need a landing page".into(),
    }
}

fn form(relay: ScriptedRelay) -> ContactForm<ScriptedRelay, RecordingView> {
    ContactForm::new(relay, RecordingView::default(), TEMPLATES)
}

#[test]
fn both_relays_succeed_then_revert_to_idle() {
    let f = form(ScriptedRelay::default());
    assert_eq!(f.state(), SubmissionState::Idle);

    let delay = pollster::block_on(f.submit(payload())).expect("submission succeeds");
    assert_eq!(delay, SUCCESS_REVERT_DELAY);
    assert_eq!(f.state(), SubmissionState::Succeeded);
    assert!(f.view().form_hidden.get());
    assert!(f.view().success_shown.get());
    assert_eq!(f.view().fields_cleared.get(), 1);
    assert!(f.view().submitting.get(), "button stays disabled until revert");
    assert_eq!(*f.relay().calls.borrow(), vec!["ack", "notify"]);

    // the timer elapses
    f.revert();
    assert_eq!(f.state(), SubmissionState::Idle);
    assert!(!f.view().form_hidden.get());
    assert!(!f.view().success_shown.get());
    assert!(!f.view().submitting.get());
    assert!(f.view().alerts.borrow().is_empty());
}

#[test]
fn notification_failure_is_not_reported_as_success() {
    let f = form(ScriptedRelay::failing(false, true));
    let err = pollster::block_on(f.submit(payload())).unwrap_err();

    assert!(matches!(err, SubmitError::Notification(_)));
    assert!(err.is_partial());
    assert_eq!(f.state(), SubmissionState::Failed(SubmitStep::Notification));
    assert_eq!(f.relay().count("notify"), 1);
    assert_eq!(*f.view().alerts.borrow(), vec![PARTIAL_FAILURE_ALERT.to_string()]);
    assert!(!f.view().form_hidden.get());
    assert!(!f.view().success_shown.get());
    assert_eq!(f.view().fields_cleared.get(), 0, "input is kept for retry");
    assert!(!f.view().submitting.get());
}

#[test]
fn acknowledgment_failure_never_sends_notification() {
    let f = form(ScriptedRelay::failing(true, false));
    let err = pollster::block_on(f.submit(payload())).unwrap_err();

    assert_eq!(err.failed_step(), Some(SubmitStep::Acknowledgment));
    assert!(!err.is_partial());
    assert_eq!(f.relay().count("ack"), 1);
    assert_eq!(f.relay().count("notify"), 0);
    assert_eq!(*f.view().alerts.borrow(), vec![FAILURE_ALERT.to_string()]);
    assert_eq!(f.state(), SubmissionState::Failed(SubmitStep::Acknowledgment));
}

#[test]
fn retry_after_failure_starts_from_idle() {
    let f = form(ScriptedRelay::failing(true, false));
    assert!(pollster::block_on(f.submit(payload())).is_err());
    assert!(pollster::block_on(f.submit(payload())).is_err());
    assert_eq!(f.relay().count("ack"), 2, "each retry makes one fresh attempt");
    assert_eq!(f.relay().count("notify"), 0);
}

#[test]
fn invalid_payload_is_not_dispatched() {
    let f = form(ScriptedRelay::default());
    let mut p = payload();
    p.phone.clear();

    let err = pollster::block_on(f.submit(p)).unwrap_err();
    match err {
        SubmitError::Invalid(fields) => assert_eq!(fields.as_slice(), &[FormField::Phone]),
        other => panic!("expected Invalid, got {other:?}"),
    }
    assert!(f.relay().calls.borrow().is_empty());
    assert_eq!(f.state(), SubmissionState::Idle);
    assert_eq!(*f.view().invalid.borrow(), vec![FormField::Phone]);
    assert!(f.view().alerts.borrow().is_empty());
}

#[test]
fn check_clears_marks_on_fields_that_now_pass() {
    let f = form(ScriptedRelay::default());
    let mut p = payload();
    p.name.clear();
    p.email = "broken".into();
    f.check(&p);
    assert_eq!(*f.view().invalid.borrow(), vec![FormField::Name, FormField::Email]);

    f.check(&payload());
    assert!(f.view().invalid.borrow().is_empty());
}

#[test]
fn submit_while_succeeded_is_busy() {
    let f = form(ScriptedRelay::default());
    pollster::block_on(f.submit(payload())).unwrap();
    let err = pollster::block_on(f.submit(payload())).unwrap_err();
    assert!(matches!(err, SubmitError::Busy));
    assert_eq!(f.relay().calls.borrow().len(), 2);
}

#[test]
fn revert_outside_success_is_a_noop() {
    let f = form(ScriptedRelay::failing(true, false));
    let _ = pollster::block_on(f.submit(payload()));
    f.revert();
    assert_eq!(f.state(), SubmissionState::Failed(SubmitStep::Acknowledgment));
}

#[test]
fn dispatch_orders_calls() {
    let relay = ScriptedRelay::default();
    pollster::block_on(dispatch(&relay, &TEMPLATES, &payload())).unwrap();
    assert_eq!(*relay.calls.borrow(), vec!["ack", "notify"]);
}

#[test]
fn default_templates_are_distinct() {
    let t = RelayTemplates::default();
    assert_ne!(t.acknowledgment, t.notification);
}

/// Records the call, then never answers.
#[derive(Default)]
struct StalledRelay {
    calls: Cell<usize>,
}

impl EmailRelay for StalledRelay {
    async fn send(&self, _template_id: &str, _payload: &ContactPayload) -> Result<(), RelayError> {
        self.calls.set(self.calls.get() + 1);
        std::future::pending().await
    }
}

struct NoopWake;

impl std::task::Wake for NoopWake {
    fn wake(self: std::sync::Arc<Self>) {}
}

#[test]
fn second_submit_while_in_flight_is_busy() {
    use std::future::Future;
    use std::task::Context;

    let f = ContactForm::new(StalledRelay::default(), RecordingView::default(), TEMPLATES);
    let waker = std::task::Waker::from(std::sync::Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);

    let mut first = Box::pin(f.submit(payload()));
    assert!(first.as_mut().poll(&mut cx).is_pending());
    assert_eq!(f.state(), SubmissionState::Submitting);
    assert!(f.view().submitting.get());

    let second = pollster::block_on(f.submit(payload()));
    assert!(matches!(second, Err(SubmitError::Busy)));
    assert_eq!(f.relay().calls.get(), 1);
    assert_eq!(f.state(), SubmissionState::Submitting);
}
