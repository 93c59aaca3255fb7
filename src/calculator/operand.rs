//! Conversion between operand strings and numbers.
//!
//! Operands are edited as text. The accepted grammar is an optional leading
//! `-` followed by either `Infinity` or digits with at most one `.` (at least
//! one digit required). Anything else, including `NaN`, does not parse.

const INFINITY: &str = "Infinity";

/// Parse an operand string into a number.
///
/// Returns `None` for empty, partial (`"."`, `"-"`) or non-numeric input.
pub fn parse_operand(operand: &str) -> Option<f64> {
    let (negative, body) = match operand.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, operand),
    };

    let magnitude = if body == INFINITY {
        f64::INFINITY
    } else {
        let mut digits = 0;
        let mut separators = 0;
        for c in body.chars() {
            match c {
                '0'..='9' => digits += 1,
                '.' => separators += 1,
                _ => return None,
            }
        }
        if digits == 0 || separators > 1 {
            return None;
        }
        body.parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Turn a computed value back into an editable operand string.
///
/// Finite values use the shortest round-trip decimal form (never an
/// exponent), and `-0` becomes `0`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY.to_string()
        } else {
            format!("-{}", INFINITY)
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("3.25"), Some(3.25));
        assert_eq!(parse_operand("-7"), Some(-7.0));
        assert_eq!(parse_operand("007"), Some(7.0));
    }

    #[test]
    fn test_parse_partial_decimals() {
        assert_eq!(parse_operand("3."), Some(3.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand(""), None);
    }

    #[test]
    fn test_parse_rejects_foreign_syntax() {
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("1e5"), None);
        assert_eq!(parse_operand("+5"), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("1.2.3"), None);
        assert_eq!(parse_operand("Infinity5"), None);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(14.0), "14");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(1e21), "1000000000000000000000");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
