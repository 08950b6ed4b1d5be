//! Designation Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Designation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Optional salary-range bounds for the role
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub min_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max_salary: Option<Decimal>,
}

/// Create designation payload (no update path is exposed by the backend)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DesignationPayload {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 2, max = 100, message = "title must be 2-100 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub min_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub max_salary: Option<Decimal>,
}
