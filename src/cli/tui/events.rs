use ratatui::crossterm::event::KeyEvent;

use crate::submit::SubmitOutcome;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Delayed step transition fired
    AdvanceDue { ticket: u64 },

    // Network call returned
    SubmitFinished { run: u64, outcome: SubmitOutcome },

    // UI events
    Tick, // for animations
}
