//! Wizard state and its reducer
//!
//! `WizardState` is the single source of truth for the RSVP flow. Screens get
//! it by shared reference; the only way to change it is
//! [`WizardState::reduce`], which consumes the old state and returns the new
//! one together with the effects the runtime has to carry out (timers, the
//! network call, decorations).

use std::time::Duration;

use tracing::{debug, warn};

use super::delays::TransitionDelays;
use super::step::Step;
use crate::response::{Beverage, Companion, Guest, Record, Selection, Submission};
use crate::submit::SubmitOutcome;

pub const SENDING_MESSAGE: &str = "Enviando...";
pub const SUCCESS_MESSAGE: &str = "🎉 Dados enviados com sucesso! Festa garantida! 🍻";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "❌ Erro ao enviar: não foi possível contatar o servidor. Tente novamente.";

/// Where the last submission attempt stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// The endpoint answered with an error message
    Rejected(String),
    /// The request never completed
    Failed,
}

impl SubmitStatus {
    /// Text for the status line, `None` when nothing has been sent yet
    pub fn message(&self) -> Option<String> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Sending => Some(SENDING_MESSAGE.to_string()),
            SubmitStatus::Sent => Some(SUCCESS_MESSAGE.to_string()),
            SubmitStatus::Rejected(reason) => Some(format!("❌ Erro ao enviar: {}", reason)),
            SubmitStatus::Failed => Some(TRANSPORT_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmitStatus::Rejected(_) | SubmitStatus::Failed)
    }
}

/// An advance that has been scheduled but not yet fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub ticket: u64,
    pub to: Step,
    /// The choice whose animation is playing
    pub selection: Selection,
}

/// Cosmetic flourishes. The runtime may drop all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    BalloonPop(Guest),
    Confetti,
    Chirp,
    FishCaught(Companion),
    SadCursor,
    GlassFill(Beverage),
}

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Record a value for the current step
    Select(Selection),
    /// A scheduled advance fired
    AdvanceDue { ticket: u64 },
    /// The network call started during run `run` returned
    SubmitFinished { run: u64, outcome: SubmitOutcome },
    /// Start over from the terminal step
    Restart,
}

/// Work the runtime performs on behalf of the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `Action::AdvanceDue { ticket }` after `delay`
    ScheduleAdvance { ticket: u64, delay: Duration },
    /// Send the record and dispatch `Action::SubmitFinished` with the outcome,
    /// echoing `run` back
    Submit { run: u64, submission: Submission },
    Celebrate(Celebration),
}

#[derive(Debug, Clone, Default)]
pub struct WizardState {
    step: Step,
    record: Record,
    status: SubmitStatus,
    pending: Option<PendingAdvance>,
    delays: TransitionDelays,
    next_ticket: u64,
    /// Bumped on every restart; replies from earlier runs are dropped
    run: u64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn pending(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    /// True while a selection animation is playing and choices are locked
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn run(&self) -> u64 {
        self.run
    }

    /// Apply one action, returning the next state and the effects to run
    pub fn reduce(mut self, action: Action) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();
        match action {
            Action::Select(selection) => self.select(selection, &mut effects),
            Action::AdvanceDue { ticket } => self.advance(ticket),
            Action::SubmitFinished { run, outcome } => {
                self.finish_submission(run, outcome, &mut effects)
            }
            Action::Restart => self.restart(),
        }
        (self, effects)
    }

    fn select(&mut self, selection: Selection, effects: &mut Vec<Effect>) {
        let Some(expected) = self.step.field() else {
            debug!(?selection, "selection ignored on terminal step");
            return;
        };
        if selection.field() != expected {
            debug!(step = %self.step, field = %selection.field(), "selection for another step ignored");
            return;
        }
        if self.pending.is_some() {
            debug!(step = %self.step, "selection ignored while an advance is pending");
            return;
        }

        self.record.set(selection);
        debug!(step = %self.step, ?selection, "recorded selection");

        match selection {
            Selection::Name(guest) => {
                effects.push(Effect::Celebrate(Celebration::BalloonPop(guest)));
                effects.push(Effect::Celebrate(Celebration::Chirp));
                effects.push(Effect::Celebrate(Celebration::Confetti));
            }
            Selection::Companion(Companion::Alone) => {
                effects.push(Effect::Celebrate(Celebration::SadCursor));
            }
            Selection::Companion(fish) => {
                effects.push(Effect::Celebrate(Celebration::FishCaught(fish)));
                effects.push(Effect::Celebrate(Celebration::Chirp));
            }
            Selection::Beverage(beverage) => {
                effects.push(Effect::Celebrate(Celebration::GlassFill(beverage)));
            }
            Selection::Dietary(_) => {
                match self.record.complete() {
                    Some(submission) => {
                        self.status = SubmitStatus::Sending;
                        effects.push(Effect::Submit {
                            run: self.run,
                            submission,
                        });
                    }
                    None => {
                        warn!(record = ?self.record, "dietary chosen with an incomplete record");
                        self.status = SubmitStatus::Failed;
                    }
                }
                return;
            }
        }

        if let (Some(delay), Some(to)) = (self.delays.for_selection(&selection), self.step.next()) {
            let ticket = self.next_ticket;
            self.next_ticket += 1;
            self.pending = Some(PendingAdvance {
                ticket,
                to,
                selection,
            });
            effects.push(Effect::ScheduleAdvance { ticket, delay });
        }
    }

    fn advance(&mut self, ticket: u64) {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                debug!(from = %self.step, to = %pending.to, "advancing");
                self.step = pending.to;
                self.pending = None;
            }
            _ => debug!(ticket, "stale advance ignored"),
        }
    }

    fn finish_submission(&mut self, run: u64, outcome: SubmitOutcome, effects: &mut Vec<Effect>) {
        if run != self.run {
            debug!(run, current = self.run, ?outcome, "submission outcome from an earlier run ignored");
            return;
        }
        if self.step != Step::Dietary {
            debug!(step = %self.step, ?outcome, "submission outcome arrived outside the dietary step");
            return;
        }

        match outcome {
            SubmitOutcome::Accepted => {
                self.status = SubmitStatus::Sent;
                self.record = Record::default();
                self.pending = None;
                self.step = Step::Success;
                effects.push(Effect::Celebrate(Celebration::Confetti));
            }
            SubmitOutcome::Rejected(reason) => {
                self.status = SubmitStatus::Rejected(reason);
            }
            SubmitOutcome::TransportFailed => {
                self.status = SubmitStatus::Failed;
            }
        }
    }

    fn restart(&mut self) {
        if !self.step.is_terminal() {
            debug!(step = %self.step, "restart ignored before success");
            return;
        }
        // Tickets keep counting so timers from the previous run stay stale
        *self = WizardState {
            delays: self.delays,
            next_ticket: self.next_ticket,
            run: self.run + 1,
            ..WizardState::default()
        };
    }
}
