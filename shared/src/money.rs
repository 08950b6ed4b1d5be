//! Monetary amount handling
//!
//! Amounts are `rust_decimal::Decimal` and serialize as JSON numbers.
//! The backend is not consistent on the read path: monetary fields arrive
//! as numbers, as quoted decimal strings, or are missing entirely. The
//! `lenient` serde module accepts all of those shapes and never fails.

use rust_decimal::Decimal;
use serde_json::Value;

/// Coerce a raw JSON value into a `Decimal`.
///
/// Total over all defined inputs: missing/null → 0, number → as-is,
/// string → parsed, anything else (or unparseable text) → 0.
pub fn coerce(value: Option<&Value>) -> Decimal {
    match value {
        None | Some(Value::Null) => Decimal::ZERO,
        // serde_json renders numbers with their exact JSON text, so a
        // string round-trip keeps full precision for integers and avoids
        // binary float artifacts for most literals.
        Some(Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
        Some(_) => Decimal::ZERO,
    }
}

/// Serde adapter for lenient monetary fields.
///
/// Use as `#[serde(default, with = "shared::money::lenient")]` so a missing
/// field also lands on zero.
pub mod lenient {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(coerce(value.as_ref()))
    }

    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(amount, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_coerce_to_zero() {
        assert_eq!(coerce(None), Decimal::ZERO);
        assert_eq!(coerce(Some(&Value::Null)), Decimal::ZERO);
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(coerce(Some(&json!(75000))), Decimal::from(75000));
        assert_eq!(coerce(Some(&json!(1234.56))), "1234.56".parse().unwrap());
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(coerce(Some(&json!("50000"))), Decimal::from(50000));
        assert_eq!(coerce(Some(&json!(" 99.99 "))), "99.99".parse().unwrap());
    }

    #[test]
    fn garbage_coerces_to_zero() {
        assert_eq!(coerce(Some(&json!("not a number"))), Decimal::ZERO);
        assert_eq!(coerce(Some(&json!({"amount": 5}))), Decimal::ZERO);
        assert_eq!(coerce(Some(&json!([1, 2]))), Decimal::ZERO);
    }
}
