//! Best-effort numeric coercion for provider payloads.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

/// Parse decimal text, accepting scientific notation. Blank or non-numeric
/// text yields `None`.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}

/// Convert a JSON number to a `Decimal`.
///
/// Floats go through their shortest textual form, so `10.1` becomes exactly
/// `10.1` rather than the nearest binary fraction.
pub fn decimal_from_number(number: &Number) -> Option<Decimal> {
    if let Some(i) = number.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(Decimal::from(u));
    }
    parse_decimal(&number.to_string())
}

/// Coerce any JSON cell to a `Decimal`.
///
/// Numbers and numeric strings convert; everything else (null, booleans,
/// free text, nested values) becomes the missing-value marker.
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => decimal_from_number(n),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(coerce_decimal(&json!(1500)), Some(dec!(1500)));
        assert_eq!(coerce_decimal(&json!(10.1)), Some(dec!(10.1)));
        assert_eq!(coerce_decimal(&json!(-3.25)), Some(dec!(-3.25)));
        assert_eq!(coerce_decimal(&json!(1e21)), Some(dec!(1000000000000000000000)));
    }

    #[test]
    fn test_coerce_numeric_strings() {
        assert_eq!(coerce_decimal(&json!("1250.5")), Some(dec!(1250.5)));
        assert_eq!(coerce_decimal(&json!(" 42 ")), Some(dec!(42)));
        assert_eq!(coerce_decimal(&json!("1e3")), Some(dec!(1000)));
    }

    #[test]
    fn test_uncoercible_values_become_missing() {
        assert_eq!(coerce_decimal(&json!(null)), None);
        assert_eq!(coerce_decimal(&json!("")), None);
        assert_eq!(coerce_decimal(&json!("n/a")), None);
        assert_eq!(coerce_decimal(&json!(true)), None);
        assert_eq!(coerce_decimal(&json!([1])), None);
        assert_eq!(coerce_decimal(&json!({"v": 1})), None);
    }
}
