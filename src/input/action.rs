//! Discrete calculator actions.

use crate::calculator::{Accumulator, Operator};

/// One user action, as delivered by a button or a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit `0`-`9` or the decimal separator
    Digit(char),
    /// One of the four operators
    Operator(Operator),
    /// The equals button
    Equals,
    /// Remove the last typed character
    Delete,
    /// Reset everything
    Clear,
}

impl Action {
    /// Run this action against the accumulator.
    pub fn apply(self, acc: &mut Accumulator) {
        tracing::trace!(action = ?self, "applying");
        match self {
            Self::Digit(token) => acc.append_digit(token),
            Self::Operator(operator) => acc.choose_operator(operator),
            Self::Equals => acc.compute(),
            Self::Delete => acc.delete_last_char(),
            Self::Clear => acc.clear(),
        }
    }

    /// Check if this action may produce a new result.
    pub fn is_equals(&self) -> bool {
        matches!(self, Self::Equals)
    }
}

impl From<Operator> for Action {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_drive_accumulator() {
        let mut acc = Accumulator::new();
        for action in [
            Action::Digit('9'),
            Action::Operator(Operator::Subtract),
            Action::Digit('1'),
            Action::Digit('2'),
            Action::Delete,
            Action::Equals,
        ] {
            action.apply(&mut acc);
        }
        assert_eq!(acc.current_operand(), "8");

        Action::Clear.apply(&mut acc);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_from_operator() {
        assert_eq!(
            Action::from(Operator::Divide),
            Action::Operator(Operator::Divide)
        );
        assert!(Action::Equals.is_equals());
        assert!(!Action::Clear.is_equals());
    }
}
