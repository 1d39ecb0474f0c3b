//! Wizard steps, in the only order they can be visited

use std::fmt;

use crate::response::Field;

/// Screens of the RSVP wizard.
///
/// Progresses linearly: Name → Companion → Beverage → Dietary → Success.
/// There is no way back; the only exit from `Success` is a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Name,
    Companion,
    Beverage,
    Dietary,
    Success,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Name,
        Step::Companion,
        Step::Beverage,
        Step::Dietary,
        Step::Success,
    ];

    pub fn index(&self) -> usize {
        match self {
            Step::Name => 0,
            Step::Companion => 1,
            Step::Beverage => 2,
            Step::Dietary => 3,
            Step::Success => 4,
        }
    }

    /// Next step in the linear progression, if any
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Name => Some(Step::Companion),
            Step::Companion => Some(Step::Beverage),
            Step::Beverage => Some(Step::Dietary),
            Step::Dietary => Some(Step::Success),
            Step::Success => None,
        }
    }

    /// Record field collected on this step. The terminal step collects nothing.
    pub fn field(&self) -> Option<Field> {
        match self {
            Step::Name => Some(Field::Name),
            Step::Companion => Some(Field::Companion),
            Step::Beverage => Some(Field::Beverage),
            Step::Dietary => Some(Field::Dietary),
            Step::Success => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Success)
    }

    /// Fraction of the progress bar to fill, 0.0 on the first screen
    pub fn progress(&self) -> f64 {
        self.index() as f64 / Step::Success.index() as f64
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Step::Name => "🎈 Quem é você? 🎈",
            Step::Companion => "🎣 Vai levar o homi ou a muié? 🎣",
            Step::Beverage => "🍺 E a bebida? 🥤",
            Step::Dietary => "🥩 E o churrasco? 🥩",
            Step::Success => "🎉 Sucesso! 🎉",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Name => "name",
            Step::Companion => "companion",
            Step::Beverage => "beverage",
            Step::Dietary => "dietary",
            Step::Success => "success",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        let mut current = Step::default();
        let mut visited = vec![current];
        while let Some(next) = current.next() {
            assert!(next > current);
            visited.push(next);
            current = next;
        }
        assert_eq!(visited, Step::ALL.to_vec());
    }

    #[test]
    fn progress_spans_zero_to_one() {
        assert_eq!(Step::Name.progress(), 0.0);
        assert_eq!(Step::Beverage.progress(), 0.5);
        assert_eq!(Step::Success.progress(), 1.0);
    }

    #[test]
    fn only_data_steps_have_fields() {
        assert_eq!(Step::Companion.field(), Some(Field::Companion));
        assert_eq!(Step::Success.field(), None);
        assert!(Step::Success.is_terminal());
        assert!(!Step::Dietary.is_terminal());
    }
}
