//! Employee Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

/// Employment type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Intern,
}

/// Postal address. The desk form only fills `streetAddress`; the remaining
/// fields exist on the backend entity and round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl Address {
    pub fn from_street(street: impl Into<String>) -> Self {
        Self {
            street_address: street.into(),
            ..Default::default()
        }
    }
}

/// Employee as returned by the backend.
///
/// Every field other than `id` is defaulted on decode: a listing must never
/// fail because one record is missing a column. `base_salary` in particular
/// goes through the lenient money coercion (number, string or absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub employee_code: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub designation_id: Option<String>,
    #[serde(default)]
    pub designation_title: Option<String>,
    #[serde(default, with = "crate::money::lenient")]
    pub base_salary: Decimal,
    #[serde(default)]
    pub status: EmploymentStatus,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Create/update payload (the backend treats update as idempotent replace,
/// so one shape serves both).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[validate(length(min = 1, message = "employee code is required"))]
    pub employee_code: String,
    #[validate(length(min = 2, max = 50, message = "first name must be 2-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "last name must be 2-50 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub joining_date: NaiveDate,
    pub department_id: String,
    pub designation_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,
    pub status: EmploymentStatus,
    pub employment_type: EmploymentType,
    pub address: Address,
}
