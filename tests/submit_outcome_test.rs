//! How endpoint replies land in the wizard state, driven end to end through
//! the headless runner with canned backends.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rsvp::cli::commands::submit::run_headless;
use rsvp::response::{Beverage, Companion, Dietary, Guest, Submission};
use rsvp::submit::{SubmitBackend, SubmitOutcome, UNKNOWN_ERROR_MESSAGE};
use rsvp::wizard::{Step, SubmitStatus, WizardState};
use rsvp::{Result, RsvpError};

/// Replies with a fixed body, `None` simulating an unreadable one
struct CannedReply(Option<&'static str>);

#[async_trait]
impl SubmitBackend for CannedReply {
    async fn send(&self, _submission: &Submission) -> Result<Option<String>> {
        Ok(self.0.map(str::to_string))
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

/// Never reaches the endpoint
struct Unreachable;

const RAW_TRANSPORT_ERROR: &str = "dns error: failed to lookup address information";

#[async_trait]
impl SubmitBackend for Unreachable {
    async fn send(&self, _submission: &Submission) -> Result<Option<String>> {
        Err(RsvpError::Generic(anyhow::anyhow!(RAW_TRANSPORT_ERROR)))
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }
}

fn answers() -> Submission {
    Submission {
        name: Guest::Nicolas,
        companion: Companion::Muie,
        beverage: Beverage::OwnDrink,
        dietary: Dietary::Restricted,
    }
}

#[tokio::test]
async fn success_reply_clears_record_and_finishes() {
    let state = run_headless(
        WizardState::new(),
        &answers(),
        &CannedReply(Some(r#"{"result":"success"}"#)),
    )
    .await;

    assert_eq!(state.step(), Step::Success);
    assert!(state.record().is_empty());
    assert_eq!(state.status(), &SubmitStatus::Sent);
}

#[tokio::test]
async fn error_reply_keeps_everything_and_shows_the_reason() {
    let state = run_headless(
        WizardState::new(),
        &answers(),
        &CannedReply(Some(r#"{"result":"error","error":"xyz"}"#)),
    )
    .await;

    assert_eq!(state.step(), Step::Dietary);
    assert_eq!(state.record().complete(), Some(answers()));
    assert!(state.status().is_error());
    assert!(state.status().message().unwrap_or_default().contains("xyz"));
}

#[tokio::test]
async fn error_reply_without_reason_uses_generic_text() {
    let state = run_headless(
        WizardState::new(),
        &answers(),
        &CannedReply(Some(r#"{"result":"error"}"#)),
    )
    .await;

    assert_eq!(
        state.status(),
        &SubmitStatus::Rejected(UNKNOWN_ERROR_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn transport_failure_hides_the_raw_error() {
    let state = run_headless(WizardState::new(), &answers(), &Unreachable).await;

    assert_eq!(state.step(), Step::Dietary);
    assert_eq!(state.record().complete(), Some(answers()));
    assert_eq!(state.status(), &SubmitStatus::Failed);

    let message = state.status().message().unwrap_or_default();
    assert!(!message.contains(RAW_TRANSPORT_ERROR));
    assert!(!message.contains("dns"));
}

#[tokio::test]
async fn non_json_reply_counts_as_success() {
    for body in [Some("<!DOCTYPE html><html>Moved</html>"), Some(""), None] {
        let state = run_headless(WizardState::new(), &answers(), &CannedReply(body)).await;
        assert_eq!(state.step(), Step::Success, "body {:?}", body);
        assert!(state.record().is_empty());
    }
}

#[tokio::test]
async fn submit_reports_transport_failure_as_a_value() {
    let outcome = rsvp::submit::submit(&Unreachable, &answers()).await;
    assert_eq!(outcome, SubmitOutcome::TransportFailed);
}
