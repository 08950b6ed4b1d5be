//! Form controllers
//!
//! Each controller holds raw string input the way a form does, validates
//! it before any network call, and translates the UI-facing field names
//! into the backend payload shape (`hire date` → `joiningDate`, `salary` →
//! `baseSalary`, free-text address → `address.streetAddress`). Parsing on
//! this write path is strict: empty or non-numeric input is a validation
//! error, never a silent zero.

pub mod department;
pub mod designation;
pub mod employee;
pub mod payroll;

pub use department::DepartmentForm;
pub use designation::DesignationForm;
pub use employee::EmployeeForm;
pub use payroll::PayrollForm;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use validator::Validate;

/// A validation violation tied to the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str },

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl FormError {
    /// The field the violation should be surfaced at.
    pub fn field(&self) -> &str {
        match self {
            FormError::Required { field }
            | FormError::InvalidNumber { field }
            | FormError::NegativeAmount { field }
            | FormError::InvalidDate { field } => field,
            FormError::Invalid { field, .. } => field,
        }
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required { field })
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn parse_money(field: &'static str, value: &str) -> Result<Decimal, FormError> {
    let raw = require(field, value)?;
    let amount: Decimal = raw
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })?;
    if amount.is_sign_negative() {
        return Err(FormError::NegativeAmount { field });
    }
    Ok(amount)
}

pub(crate) fn parse_optional_money(
    field: &'static str,
    value: &str,
) -> Result<Option<Decimal>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_money(field, value).map(Some)
}

pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    let raw = require(field, value)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| FormError::InvalidDate { field })
}

pub(crate) fn parse_u32(field: &'static str, value: &str) -> Result<u32, FormError> {
    require(field, value)?
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })
}

pub(crate) fn parse_i32(field: &'static str, value: &str) -> Result<i32, FormError> {
    require(field, value)?
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })
}

/// Run the payload's declarative checks (email format, ranges) and pin the
/// first violation to its field.
pub(crate) fn check<T: Validate>(payload: &T) -> Result<(), FormError> {
    match payload.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let (field, message) = errors
                .field_errors()
                .into_iter()
                .next()
                .map(|(field, violations)| {
                    let message = violations
                        .first()
                        .and_then(|v| v.message.clone())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "is invalid".to_string());
                    (field.to_string(), message)
                })
                .unwrap_or_else(|| ("form".to_string(), "is invalid".to_string()));
            Err(FormError::Invalid { field, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_whitespace() {
        assert_eq!(
            require("email", "   "),
            Err(FormError::Required { field: "email" })
        );
        assert_eq!(require("email", " a@b.c "), Ok("a@b.c".to_string()));
    }

    #[test]
    fn money_parsing_is_strict() {
        assert_eq!(parse_money("salary", "75000.50"), Ok("75000.50".parse().unwrap()));
        assert_eq!(
            parse_money("salary", ""),
            Err(FormError::Required { field: "salary" })
        );
        assert_eq!(
            parse_money("salary", "abc"),
            Err(FormError::InvalidNumber { field: "salary" })
        );
        assert_eq!(
            parse_money("salary", "-5"),
            Err(FormError::NegativeAmount { field: "salary" })
        );
    }

    #[test]
    fn optional_money_treats_empty_as_absent() {
        assert_eq!(parse_optional_money("min salary", ""), Ok(None));
        assert_eq!(
            parse_optional_money("min salary", "1000"),
            Ok(Some("1000".parse().unwrap()))
        );
    }

    #[test]
    fn dates_must_be_iso() {
        assert!(parse_date("hire date", "2021-07-15").is_ok());
        assert_eq!(
            parse_date("hire date", "15/07/2021"),
            Err(FormError::InvalidDate { field: "hire date" })
        );
    }
}
