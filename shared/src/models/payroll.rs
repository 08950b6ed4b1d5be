//! Payroll Model
//!
//! Status machine: PENDING → APPROVED → PAID, with REJECTED terminal and
//! reachable only from PENDING. Transitions are backend operations; the
//! predicates here only gate whether a transition request may be issued.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Approved,
    Paid,
    Rejected,
}

impl PaymentStatus {
    /// Approve is disabled once the record is approved or paid.
    pub fn can_approve(self) -> bool {
        !matches!(self, PaymentStatus::Approved | PaymentStatus::Paid)
    }

    /// Payment can be processed from any state except PAID.
    pub fn can_process_payment(self) -> bool {
        self != PaymentStatus::Paid
    }
}

impl std::fmt::Display for PaymentStatus {
    /// Wire-name rendering, also used for display.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Approved => "APPROVED",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Rejected => "REJECTED",
        };
        f.write_str(name)
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    BankTransfer,
    Cheque,
    Cash,
    DigitalWallet,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Cheque => "CHEQUE",
            PaymentMethod::Cash => "CASH",
            PaymentMethod::DigitalWallet => "DIGITAL_WALLET",
        };
        f.write_str(name)
    }
}

/// Payroll record as returned by the backend.
///
/// Employee name/code are denormalized for display. Monetary fields are
/// decoded leniently; `net_salary` stays optional so the display fallback
/// (net absent → show basic) is expressible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, with = "crate::money::lenient")]
    pub basic_salary: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub gross_salary: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_deductions: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub net_salary: Option<Decimal>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl Payroll {
    /// Net salary for display; never blank, falls back to basic salary.
    pub fn net_or_basic(&self) -> Decimal {
        self.net_salary.unwrap_or(self.basic_salary)
    }

    pub fn can_approve(&self) -> bool {
        self.payment_status.can_approve()
    }

    pub fn can_process_payment(&self) -> bool {
        self.payment_status.can_process_payment()
    }
}

/// Create payroll payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPayload {
    #[validate(length(min = 1, message = "employee is required"))]
    pub employee_id: String,
    pub employee_code: String,
    pub employee_name: String,
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: u32,
    #[validate(range(min = 2020, message = "year must be 2020 or later"))]
    pub year: i32,
    pub payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub basic_salary: Decimal,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approve_gate_follows_status() {
        assert!(PaymentStatus::Pending.can_approve());
        assert!(PaymentStatus::Rejected.can_approve());
        assert!(!PaymentStatus::Approved.can_approve());
        assert!(!PaymentStatus::Paid.can_approve());
    }

    #[test]
    fn payment_gate_only_blocks_paid() {
        assert!(PaymentStatus::Pending.can_process_payment());
        assert!(PaymentStatus::Approved.can_process_payment());
        assert!(!PaymentStatus::Paid.can_process_payment());
    }

    #[test]
    fn net_falls_back_to_basic() {
        let payroll: Payroll = serde_json::from_value(json!({
            "id": "P1",
            "employeeId": "E1",
            "month": 1,
            "year": 2024,
            "basicSalary": 75000,
            "paymentStatus": "PENDING"
        }))
        .unwrap();
        assert_eq!(payroll.net_or_basic(), Decimal::from(75000));
    }

    #[test]
    fn explicit_net_wins() {
        let payroll: Payroll = serde_json::from_value(json!({
            "id": "P2",
            "employeeId": "E1",
            "basicSalary": 75000,
            "netSalary": 68250.0,
            "paymentStatus": "APPROVED"
        }))
        .unwrap();
        assert_eq!(payroll.net_or_basic(), "68250".parse().unwrap());
    }

    #[test]
    fn status_defaults_to_pending() {
        let payroll: Payroll =
            serde_json::from_value(json!({"id": "P3", "employeeId": "E1"})).unwrap();
        assert_eq!(payroll.payment_status, PaymentStatus::Pending);
    }
}
