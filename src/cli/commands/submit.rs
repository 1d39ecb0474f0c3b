use std::collections::VecDeque;

use async_trait::async_trait;
use tracing::{debug, info};

use super::CommandHandler;
use crate::config::RsvpConfig;
use crate::response::{Selection, Submission};
use crate::submit::{self, HttpBackend, SubmitBackend};
use crate::wizard::{Action, Effect, SubmitStatus, WizardState};
use crate::{Result, RsvpError};

/// Handler for the headless `submit` command
pub struct SubmitCommand {
    pub config: RsvpConfig,
    pub submission: Submission,
}

#[async_trait]
impl CommandHandler for SubmitCommand {
    async fn execute(&self) -> Result<()> {
        let backend = HttpBackend::new(&self.config.submit)?;
        info!(endpoint = %backend.endpoint(), "sending RSVP");

        let state = run_headless(WizardState::new(), &self.submission, &backend).await;
        match state.status() {
            SubmitStatus::Sent => {
                println!("{}", state.status().message().unwrap_or_default());
                Ok(())
            }
            status => Err(RsvpError::Submission(
                status.message().unwrap_or_default(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "submit"
    }
}

impl SubmitCommand {
    pub fn new(config: RsvpConfig, submission: Submission) -> Self {
        Self { config, submission }
    }
}

/// Walk the wizard through every step with the given answers.
///
/// The same reducer as the interactive form runs here. Scheduled advances fire
/// immediately and decorations are dropped; the submission goes through
/// `backend` and its outcome is fed back before returning.
pub async fn run_headless(
    mut state: WizardState,
    submission: &Submission,
    backend: &dyn SubmitBackend,
) -> WizardState {
    let mut queue: VecDeque<Action> = [
        Selection::Name(submission.name),
        Selection::Companion(submission.companion),
        Selection::Beverage(submission.beverage),
        Selection::Dietary(submission.dietary),
    ]
    .into_iter()
    .map(Action::Select)
    .collect();

    while let Some(action) = queue.pop_front() {
        let (next, effects) = state.reduce(action);
        state = next;

        for effect in effects {
            match effect {
                Effect::ScheduleAdvance { ticket, .. } => {
                    queue.push_front(Action::AdvanceDue { ticket });
                }
                Effect::Submit { run, submission } => {
                    let outcome = submit::submit(backend, &submission).await;
                    queue.push_front(Action::SubmitFinished { run, outcome });
                }
                Effect::Celebrate(celebration) => debug!(?celebration, "skipped"),
            }
        }
    }

    state
}
