//! The four binary operators.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Which symbol set is used when rendering an operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// `+ − × ÷`
    #[default]
    Typographic,
    /// `+ - * /`
    Ascii,
}

impl Operator {
    /// Apply the operator to `(left, right)` in that order.
    ///
    /// Division follows IEEE-754: dividing by zero gives an infinity, or NaN
    /// for `0 / 0`.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// Normalize any of the accepted glyphs to an operator.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Get the symbol used to render this operator.
    pub fn symbol(self, style: GlyphStyle) -> char {
        match (self, style) {
            (Self::Add, _) => '+',
            (Self::Subtract, GlyphStyle::Typographic) => '−',
            (Self::Subtract, GlyphStyle::Ascii) => '-',
            (Self::Multiply, GlyphStyle::Typographic) => '×',
            (Self::Multiply, GlyphStyle::Ascii) => '*',
            (Self::Divide, GlyphStyle::Typographic) => '÷',
            (Self::Divide, GlyphStyle::Ascii) => '/',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_operand_order() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), 12.0);
        assert_eq!(Operator::Divide.apply(3.0, 4.0), 0.75);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_glyph_normalization() {
        assert_eq!(Operator::from_glyph('+'), Some(Operator::Add));
        assert_eq!(Operator::from_glyph('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_glyph('−'), Some(Operator::Subtract));
        assert_eq!(Operator::from_glyph('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_glyph('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_glyph('%'), None);
        assert_eq!(Operator::from_glyph('7'), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Divide.symbol(GlyphStyle::Typographic), '÷');
        assert_eq!(Operator::Divide.symbol(GlyphStyle::Ascii), '/');
        assert_eq!(Operator::Subtract.symbol(GlyphStyle::Typographic), '−');
        assert_eq!(Operator::Add.symbol(GlyphStyle::Ascii), '+');
    }
}
