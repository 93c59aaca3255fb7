//! The arithmetic input state machine.
//!
//! Interprets digit, operator, equals, delete and clear actions and keeps the
//! operands as editable text. Every edge case resolves to a silent no-op.

use serde::Serialize;

use super::display::format_for_display;
use super::operand::{format_value, parse_operand};
use super::operator::{GlyphStyle, Operator};

/// The decimal separator accepted by [`Accumulator::append_digit`].
pub const DECIMAL_SEPARATOR: char = '.';

/// Calculator state plus the operations that mutate it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accumulator {
    /// Left operand of an in-flight operation, empty when none.
    pending: String,
    /// Operand currently being typed.
    current: String,
    operator: Option<Operator>,
}

/// The two rendered display lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Display {
    /// Pending operand followed by the operator symbol, or empty.
    pub previous: String,
    /// The operand being typed, or the last result.
    pub current: String,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_operand(&self) -> &str {
        &self.current
    }

    pub fn pending_operand(&self) -> &str {
        &self.pending
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Check if all fields are empty.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.current.is_empty() && self.operator.is_none()
    }

    /// Append a digit or the decimal separator to the current operand.
    ///
    /// A second separator and any other character are ignored.
    pub fn append_digit(&mut self, token: char) {
        if token == DECIMAL_SEPARATOR {
            if self.current.contains(DECIMAL_SEPARATOR) {
                return;
            }
        } else if !token.is_ascii_digit() {
            tracing::trace!(?token, "ignoring non-digit token");
            return;
        }

        self.current.push(token);
    }

    /// Select an operator, resolving any pending operation first.
    ///
    /// Does nothing until a current operand has been typed.
    pub fn choose_operator(&mut self, operator: Operator) {
        if self.current.is_empty() {
            return;
        }

        if !self.pending.is_empty() {
            self.compute();
        }

        self.operator = Some(operator);
        self.pending = std::mem::take(&mut self.current);
    }

    /// Apply the operator to the pending and current operands.
    ///
    /// Leaves the state untouched if no operator is set or either operand
    /// does not parse. The result replaces the current operand.
    pub fn compute(&mut self) {
        let Some(operator) = self.operator else {
            return;
        };
        let (Some(left), Some(right)) =
            (parse_operand(&self.pending), parse_operand(&self.current))
        else {
            return;
        };

        let value = operator.apply(left, right);
        tracing::debug!(left, right, ?operator, value, "computed");

        self.current = format_value(value);
        self.pending.clear();
        self.operator = None;
    }

    /// Remove the last character of the current operand.
    pub fn delete_last_char(&mut self) {
        self.current.pop();
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.current.clear();
        self.operator = None;
    }

    /// Render both display lines.
    pub fn display(&self, glyphs: GlyphStyle) -> Display {
        let previous = match self.operator {
            Some(operator) => format!(
                "{} {}",
                format_for_display(&self.pending),
                operator.symbol(glyphs)
            ),
            None => String::new(),
        };

        Display {
            previous,
            current: format_for_display(&self.current),
        }
    }
}
