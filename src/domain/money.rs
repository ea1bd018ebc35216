use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::{Number, Value};

use super::AccountError;

/// Money is represented as an exact decimal so fractional amounts add and
/// subtract without binary floating-point drift: 13.7 - 8.5 is 5.2.
pub type Amount = Decimal;

/// Smallest non-zero step a decimal can hold (28 fractional digits).
const SMALLEST_STEP: f64 = 1e-28;

/// Format an amount with at least two decimal places.
/// Example: 5 -> "5.00", 5.2 -> "5.20", -0.125 -> "-0.125"
pub fn format_amount(amount: Amount) -> String {
    let mut normalized = amount.normalize();
    if normalized.scale() < 2 {
        normalized.rescale(2);
    }
    normalized.to_string()
}

/// Convert an untyped argument into an amount.
/// Only JSON numbers are accepted; integers and floats both go through their
/// decimal text so 3.2 becomes exactly 3.2.
pub fn amount_from_value(value: &Value) -> Result<Amount, AccountError> {
    match value {
        Value::Number(number) => amount_from_number(number),
        other => Err(AccountError::InvalidType {
            kind: value_kind(other),
        }),
    }
}

fn amount_from_number(number: &Number) -> Result<Amount, AccountError> {
    if let Some(n) = number.as_i64() {
        return Ok(Decimal::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Ok(Decimal::from(n));
    }

    // Floats print in shortest round-trip form, e.g. "13.7" or "1e-7"
    let text = number.to_string();
    if let Ok(amount) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        return Ok(amount);
    }

    // Too many fractional digits or too large: round what fits, reject the rest
    let value = number.as_f64().ok_or(AccountError::Overflow)?;
    if value.abs() < SMALLEST_STEP {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64_retain(value)
        .or_else(|| Decimal::from_f64(value))
        .map(|amount| amount.round_dp(28))
        .ok_or(AccountError::Overflow)
}

/// Short name of a JSON value's type, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn amount(s: &str) -> Amount {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(amount("5")), "5.00");
        assert_eq!(format_amount(amount("5.2")), "5.20");
        assert_eq!(format_amount(amount("22.730")), "22.73");
        assert_eq!(format_amount(amount("-15")), "-15.00");
        assert_eq!(format_amount(amount("-0.125")), "-0.125");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_amount_from_integers_and_floats() {
        assert_eq!(amount_from_value(&json!(15)), Ok(amount("15")));
        assert_eq!(amount_from_value(&json!(-3)), Ok(amount("-3")));
        assert_eq!(amount_from_value(&json!(13.7)), Ok(amount("13.7")));
        assert_eq!(amount_from_value(&json!(3.2)), Ok(amount("3.2")));
        assert_eq!(amount_from_value(&json!(u64::MAX)), Ok(Decimal::from(u64::MAX)));
    }

    #[test]
    fn test_amount_from_float_is_exact() {
        let balance = amount_from_value(&json!(13.7)).unwrap();
        let withdrawal = amount_from_value(&json!(8.5)).unwrap();
        assert_eq!(balance - withdrawal, amount("5.2"));
    }

    #[test]
    fn test_amount_from_non_numbers() {
        assert_eq!(
            amount_from_value(&json!("a")),
            Err(AccountError::InvalidType { kind: "string" })
        );
        assert_eq!(
            amount_from_value(&json!(["list"])),
            Err(AccountError::InvalidType { kind: "list" })
        );
        assert_eq!(
            amount_from_value(&json!({"amount": 1})),
            Err(AccountError::InvalidType { kind: "object" })
        );
        assert_eq!(
            amount_from_value(&json!(true)),
            Err(AccountError::InvalidType { kind: "boolean" })
        );
        assert_eq!(
            amount_from_value(&Value::Null),
            Err(AccountError::InvalidType { kind: "null" })
        );
    }

    #[test]
    fn test_amount_below_smallest_step_rounds_to_zero() {
        assert_eq!(amount_from_value(&json!(1e-30)), Ok(Decimal::ZERO));
        assert_eq!(amount_from_value(&json!(-1e-29)), Ok(Decimal::ZERO));
        assert_eq!(amount_from_value(&json!(5e-324)), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_amount_with_extra_fractional_digits_is_rounded() {
        let amount = amount_from_value(&json!(1.5e-27)).unwrap();
        assert!(amount > Decimal::ZERO);
        assert!(amount.scale() <= 28);
    }

    #[test]
    fn test_amount_out_of_range() {
        assert_eq!(amount_from_value(&json!(1e300)), Err(AccountError::Overflow));
    }
}
