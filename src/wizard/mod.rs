//! Step sequencer for the RSVP wizard
//!
//! Framework-agnostic: the TUI and the headless `submit` command both drive
//! the same reducer.

pub mod delays;
pub mod scheduler;
pub mod state;
pub mod step;

pub use delays::TransitionDelays;
pub use scheduler::DelayScheduler;
pub use state::{Action, Celebration, Effect, PendingAdvance, SubmitStatus, WizardState};
pub use step::Step;
