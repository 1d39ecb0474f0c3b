use std::time::Duration;

use crate::response::{Companion, Selection};

/// How long each selection animation plays before the wizard moves on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelays {
    /// Balloon pop before the name is taken
    pub balloon_pop: Duration,
    /// Pause after the name screen settles
    pub name_settle: Duration,
    /// Fish catch animation, only for the two fish
    pub fish_catch: Duration,
    /// Pause after any companion choice
    pub companion_settle: Duration,
    /// Glass filling on the beverage screen
    pub glass_fill: Duration,
}

impl Default for TransitionDelays {
    fn default() -> Self {
        Self {
            balloon_pop: Duration::from_millis(600),
            name_settle: Duration::from_millis(800),
            fish_catch: Duration::from_millis(1000),
            companion_settle: Duration::from_millis(1000),
            glass_fill: Duration::from_millis(2000),
        }
    }
}

impl TransitionDelays {
    /// Delay before advancing after `selection`, `None` when the step does not advance on its own
    pub fn for_selection(&self, selection: &Selection) -> Option<Duration> {
        match selection {
            Selection::Name(_) => Some(self.balloon_pop + self.name_settle),
            // Going alone skips the catch animation entirely
            Selection::Companion(Companion::Alone) => Some(self.companion_settle),
            Selection::Companion(_) => Some(self.fish_catch + self.companion_settle),
            Selection::Beverage(_) => Some(self.glass_fill),
            Selection::Dietary(_) => None,
        }
    }
}
