//! Display formatting for operands.
//!
//! Pure functions with no access to calculator state. The integer part of an
//! operand is grouped in thousands (en locale), the fractional part is kept
//! exactly as typed.

use super::operand::parse_operand;

/// Format an operand string for display.
///
/// - `"1234567"` becomes `"1,234,567"`
/// - `"1234.5"` becomes `"1,234.5"`
/// - `"."` stays `"."` (empty integer part, empty fraction)
pub fn format_for_display(operand: &str) -> String {
    let (integer_part, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let integer_display = parse_operand(integer_part)
        .map(format_integer)
        .unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{}.{}", integer_display, fraction),
        None => integer_display,
    }
}

/// Render an integral value with thousand separators and no fraction digits.
fn format_integer(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let digits = format!("{:.0}", value.abs());
    format!("{}{}", sign, format_with_separators(&digits))
}

/// Insert a `,` between every group of three digits, counting from the right.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
