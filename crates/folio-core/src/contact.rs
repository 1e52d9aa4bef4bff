//! Contact form state machine and the outbound message seam.
//!
//! The form itself is a small synchronous machine: Idle -> Submitting ->
//! Succeeded -> (banner timeout) -> Idle. Actually delivering the message is
//! an injected asynchronous collaborator behind [`MessageSender`], so the
//! shipped fixed-delay fake can be swapped for a real transport without
//! touching the machine.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Timing knobs for the submission flow. Both values are presentation
/// configuration, overridable from the app's CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    /// How long the (simulated) send takes.
    pub submit_delay: Duration,
    /// How long the success banner stays up before auto-hiding.
    pub banner_duration: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            banner_duration: Duration::from_millis(5000),
        }
    }
}

/// Outbound message, snapshotted at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Transport-level failure from a message sender.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("message transport unavailable: {0}")]
    Unavailable(String),
}

/// Why a submit was rejected before reaching the sender.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Where the submission flow currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Reachable once a real transport can fail; the fixed-delay sender
    /// never produces it.
    Failed(String),
}

/// The message-send capability behind the form.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, payload: MessagePayload) -> Result<(), SendError>;
}

/// Simulated sender: waits out its delay, then reports success.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelaySender {
    delay: Duration,
}

impl FixedDelaySender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MessageSender for FixedDelaySender {
    async fn send(&self, _payload: MessagePayload) -> Result<(), SendError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Contact form fields plus submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
    }

    /// Validates the fields and moves Idle -> Submitting, returning the
    /// payload to hand to a [`MessageSender`]. Any empty field rejects the
    /// submit with no state change.
    pub fn begin_submit(&mut self) -> Result<MessagePayload, SubmitError> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmitError::EmptyField(field));
            }
        }
        self.status = SubmitStatus::Submitting;
        Ok(MessagePayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Applies the sender's outcome. Success clears all three fields;
    /// failure keeps them so the visitor can retry.
    pub fn complete_submit(&mut self, outcome: Result<(), SendError>) {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err.to_string());
            }
        }
    }

    /// Auto-hides the success banner. Only acts in `Succeeded`, so a stale
    /// timer firing late -- or after the owning view scheduled a newer
    /// submission -- is a no-op.
    pub fn dismiss_banner(&mut self) {
        if self.status == SubmitStatus::Succeeded {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Jane Doe".to_string());
        form.set_email("jane@example.com".to_string());
        form.set_message("Hello!".to_string());
        form
    }

    #[test]
    fn test_submit_rejected_while_any_field_empty() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyField("name")));
        assert_eq!(*form.status(), SubmitStatus::Idle);

        form.set_name("Jane".to_string());
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyField("email")));

        form.set_email("jane@example.com".to_string());
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyField("message")));
        assert_eq!(*form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_whitespace_only_field_counts_as_empty() {
        let mut form = filled_form();
        form.set_message("   ".to_string());
        assert_eq!(form.begin_submit(), Err(SubmitError::EmptyField("message")));
    }

    #[test]
    fn test_successful_submission_clears_fields() {
        let mut form = filled_form();

        let payload = form.begin_submit().unwrap();
        assert_eq!(*form.status(), SubmitStatus::Submitting);
        assert_eq!(payload.name, "Jane Doe");
        // Fields stay intact while the send is in flight.
        assert_eq!(form.name, "Jane Doe");

        form.complete_submit(Ok(()));
        assert_eq!(*form.status(), SubmitStatus::Succeeded);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_double_submit_rejected_while_in_flight() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_keeps_fields_for_retry() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Err(SendError::Unavailable("offline".to_string())));

        assert!(matches!(form.status(), SubmitStatus::Failed(_)));
        assert_eq!(form.name, "Jane Doe");
    }

    #[test]
    fn test_banner_dismisses_exactly_once() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Ok(()));

        form.dismiss_banner();
        assert_eq!(*form.status(), SubmitStatus::Idle);

        // A stale timer firing again must not disturb anything, including a
        // submission that started in the meantime.
        form.dismiss_banner();
        assert_eq!(*form.status(), SubmitStatus::Idle);

        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.dismiss_banner();
        assert_eq!(*form.status(), SubmitStatus::Submitting);
    }

    #[tokio::test]
    async fn test_full_flow_with_fixed_delay_sender() {
        let sender = FixedDelaySender::new(Duration::from_millis(5));
        let mut form = filled_form();

        let payload = form.begin_submit().unwrap();
        let outcome = sender.send(payload).await;
        form.complete_submit(outcome);

        assert_eq!(*form.status(), SubmitStatus::Succeeded);
        assert_eq!(form.name, "");

        form.dismiss_banner();
        assert_eq!(*form.status(), SubmitStatus::Idle);
    }
}
