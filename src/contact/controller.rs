use super::{
    validate, ContactFormData, ContactTransport, Field, SubmissionResult, SubmissionState,
    TransportError, ValidationErrors,
};

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// State of one contact form: the typed values, their validation errors and
/// where the current submission stands.
///
/// Submitting is split into [`begin_submit`](Self::begin_submit) and
/// [`complete_submit`](Self::complete_submit) so a UI can hold the form in a
/// signal and await the transport without keeping it borrowed.
/// [`on_submit`](Self::on_submit) runs both around a transport call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFormData,
    pub errors: ValidationErrors,
    pub state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the new value and drops any error shown for that field. The
    /// field is not re-validated until the next submit.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.remove(field);
    }

    /// Validates the form and, if it passes, moves to `Submitting` and returns
    /// the payload to send.
    ///
    /// Returns `None` when a submission is already in flight or when
    /// validation failed; in the latter case the errors are stored and the
    /// state is `Idle`.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.state.is_submitting() {
            log::debug!("Ignoring submit while a message is being sent");
            return None;
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            log::debug!("Contact form has {} invalid field(s)", self.errors.len());
            self.state = SubmissionState::Idle;
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(self.fields.clone())
    }

    /// Applies the transport outcome. Does nothing unless a submission is in flight.
    pub fn complete_submit(&mut self, outcome: Result<SubmissionResult, TransportError>) {
        if !self.state.is_submitting() {
            return;
        }
        self.state = match outcome {
            Ok(res) if res.success => {
                self.fields = ContactFormData::default();
                self.errors.clear();
                SubmissionState::Success
            }
            Ok(res) => SubmissionState::Error(res.message),
            Err(err) => {
                log::error!("Contact transport failed: {err}");
                SubmissionState::Error(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };
        log::debug!("Contact form is now {:?}", self.state);
    }

    /// Returns to `Idle` after a successful send. Returns whether anything changed.
    pub fn reset_after_success(&mut self) -> bool {
        if self.state != SubmissionState::Success {
            return false;
        }
        self.fields = ContactFormData::default();
        self.errors.clear();
        self.state = SubmissionState::Idle;
        true
    }

    pub async fn on_submit<T: ContactTransport>(&mut self, transport: &T) -> &SubmissionState {
        if let Some(payload) = self.begin_submit() {
            let outcome = transport.submit(&payload).await;
            self.complete_submit(outcome);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;

    struct StubTransport {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactFormData>>,
        outcome: Result<SubmissionResult, TransportError>,
    }

    impl StubTransport {
        fn new(outcome: Result<SubmissionResult, TransportError>) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                outcome,
            }
        }

        fn ok() -> Self {
            Self::new(Ok(SubmissionResult {
                success: true,
                status: 200,
                message: "ok".to_string(),
                errors: None,
            }))
        }
    }

    impl ContactTransport for StubTransport {
        async fn submit(
            &self,
            form: &ContactFormData,
        ) -> Result<SubmissionResult, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(form.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.on_field_change(Field::Name, "Grace Hopper");
        form.on_field_change(Field::Email, "grace@example.com");
        form.on_field_change(Field::Subject, "Compiler work");
        form.on_field_change(Field::Description, "I need help with a COBOL migration.");
        form
    }

    #[tokio::test]
    async fn test_successful_submit_clears_fields() {
        let transport = StubTransport::ok();
        let mut form = filled();
        let entered = form.fields.clone();

        let state = form.on_submit(&transport).await.clone();

        assert_eq!(state, SubmissionState::Success);
        assert!(form.fields.is_empty());
        assert!(form.errors.is_empty());
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(*transport.sent.borrow(), vec![entered]);
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_fields() {
        let transport = StubTransport::new(Ok(SubmissionResult::failure(
            429,
            "Too many messages, try again in an hour",
        )));
        let mut form = filled();
        let entered = form.fields.clone();

        form.on_submit(&transport).await;

        assert_eq!(
            form.state,
            SubmissionState::Error("Too many messages, try again in an hour".to_string())
        );
        assert_eq!(form.fields, entered);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_fields() {
        let transport = StubTransport::new(Err(TransportError::Network(
            "connection refused".to_string(),
        )));
        let mut form = filled();
        let entered = form.fields.clone();

        form.on_submit(&transport).await;

        let message = form.state.error_message().expect("should be in error state");
        assert!(!message.is_empty());
        assert_eq!(message, GENERIC_FAILURE_MESSAGE);
        assert_eq!(form.fields, entered);
    }

    #[tokio::test]
    async fn test_invalid_form_never_hits_network() {
        let transport = StubTransport::ok();
        let mut form = filled();
        form.on_field_change(Field::Email, "bad-email");

        let state = form.on_submit(&transport).await.clone();

        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(
            form.errors.get(Field::Email),
            Some("Please enter a valid email address")
        );
    }

    #[tokio::test]
    async fn test_resubmit_from_error() {
        let failing = StubTransport::new(Err(TransportError::Network("offline".to_string())));
        let mut form = filled();
        form.on_submit(&failing).await;
        assert!(form.state.error_message().is_some());

        let transport = StubTransport::ok();
        form.on_submit(&transport).await;
        assert_eq!(form.state, SubmissionState::Success);
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_validation_failure_from_error_returns_to_idle() {
        let mut form = filled();
        form.state = SubmissionState::Error("server said no".to_string());
        form.on_field_change(Field::Name, "");

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state, SubmissionState::Idle);
        assert_eq!(form.errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.on_field_change(Field::Name, "Jo");
        form.on_field_change(Field::Email, "bad-email");
        form.on_field_change(Field::Subject, "Hi!");
        form.on_field_change(Field::Description, "short");
        assert_eq!(form.begin_submit(), None);
        assert!(form.errors.contains(Field::Email));
        assert!(form.errors.contains(Field::Description));

        form.on_field_change(Field::Email, "still-bad");

        assert!(!form.errors.contains(Field::Email));
        assert!(form.errors.contains(Field::Description));
        assert_eq!(form.state, SubmissionState::Idle);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.state, SubmissionState::Submitting);

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state, SubmissionState::Submitting);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = filled();
        let before = form.clone();
        form.complete_submit(Ok(SubmissionResult::failure(500, "late")));
        assert_eq!(form, before);
    }

    #[test]
    fn test_reset_after_success() {
        let mut form = filled();
        assert!(!form.reset_after_success());

        form.begin_submit();
        form.complete_submit(Ok(SubmissionResult {
            success: true,
            status: 200,
            message: "ok".to_string(),
            errors: None,
        }));
        assert_eq!(form.state, SubmissionState::Success);

        assert!(form.reset_after_success());
        assert_eq!(form, ContactForm::new());
        // a second timer firing is harmless
        assert!(!form.reset_after_success());
    }
}
