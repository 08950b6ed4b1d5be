//! Payroll form controller
//!
//! The backend wants the employee code and display name denormalized onto
//! the record, so the form resolves the selected employee against the
//! loaded list at submit time. Selecting an employee also autofills the
//! basic salary from their base salary; the value stays editable.

use chrono::{Datelike, Local};
use payday_client::HttpClient;
use shared::models::{Employee, PaymentMethod, PaymentStatus, PayrollPayload};

use super::{FormError, check, parse_date, parse_i32, parse_money, parse_u32, require};
use crate::core::{DeskContext, DeskError};

/// Payroll create form
#[derive(Debug, Clone)]
pub struct PayrollForm {
    pub employee_id: String,
    pub month: String,
    pub year: String,
    pub payment_date: String,
    pub basic_salary: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}

impl Default for PayrollForm {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            employee_id: String::new(),
            month: today.month().to_string(),
            year: today.year().to_string(),
            payment_date: today.to_string(),
            basic_salary: String::new(),
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::BankTransfer,
        }
    }
}

impl PayrollForm {
    /// Fresh form with the period and payment date prefilled from today.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an employee and pull their base salary into the form.
    pub fn autofill_from(&mut self, employee: &Employee) {
        self.employee_id = employee.id.clone();
        self.basic_salary = employee.base_salary.to_string();
    }

    /// Validate and build the payload, resolving the selected employee's
    /// code and name from the loaded list.
    pub fn to_payload(&self, employees: &[Employee]) -> Result<PayrollPayload, FormError> {
        let employee_id = require("employee", &self.employee_id)?;
        let employee = employees
            .iter()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| FormError::Invalid {
                field: "employee".to_string(),
                message: "selected employee is no longer available".to_string(),
            })?;

        let payload = PayrollPayload {
            employee_id,
            employee_code: employee.employee_code.clone(),
            employee_name: employee.full_name(),
            month: parse_u32("month", &self.month)?,
            year: parse_i32("year", &self.year)?,
            payment_date: parse_date("payment date", &self.payment_date)?,
            basic_salary: parse_money("basic salary", &self.basic_salary)?,
            payment_status: self.payment_status,
            payment_method: self.payment_method,
        };
        check(&payload)?;
        Ok(payload)
    }

    pub async fn submit<C: HttpClient>(
        &mut self,
        ctx: &mut DeskContext<C>,
    ) -> Result<(), DeskError> {
        let payload = self.to_payload(&ctx.employees)?;
        match ctx.client().create_payroll(&payload).await {
            Ok(_) => {
                ctx.notices.success("Payroll created successfully!");
                self.reset();
                ctx.load_payrolls().await?;
                ctx.load_dashboard().await?;
                Ok(())
            }
            Err(e) => {
                ctx.report(&e);
                Err(e.into())
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn employees() -> Vec<Employee> {
        vec![
            serde_json::from_value(serde_json::json!({
                "id": "E1",
                "employeeCode": "EMP-001",
                "firstName": "Asha",
                "lastName": "Rao",
                "baseSalary": 75000
            }))
            .unwrap(),
        ]
    }

    fn filled_form() -> PayrollForm {
        PayrollForm {
            employee_id: "E1".into(),
            month: "3".into(),
            year: "2024".into(),
            payment_date: "2024-03-31".into(),
            basic_salary: "75000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn denormalizes_employee_code_and_name() {
        let payload = filled_form().to_payload(&employees()).unwrap();
        assert_eq!(payload.employee_code, "EMP-001");
        assert_eq!(payload.employee_name, "Asha Rao");
        assert_eq!(payload.basic_salary, Decimal::from(75000));
    }

    #[test]
    fn stale_employee_selection_is_caught() {
        let mut form = filled_form();
        form.employee_id = "E404".into();
        let err = form.to_payload(&employees()).unwrap_err();
        assert_eq!(err.field(), "employee");
    }

    #[test]
    fn month_out_of_range_fails_payload_checks() {
        let mut form = filled_form();
        form.month = "13".into();
        let err = form.to_payload(&employees()).unwrap_err();
        assert_eq!(err.field(), "month");
    }

    #[test]
    fn autofill_copies_base_salary() {
        let list = employees();
        let mut form = PayrollForm::new();
        form.autofill_from(&list[0]);
        assert_eq!(form.employee_id, "E1");
        assert_eq!(form.basic_salary, "75000");
    }

    #[test]
    fn fresh_form_prefills_current_period() {
        let today = Local::now().date_naive();
        let form = PayrollForm::new();
        assert_eq!(form.month, today.month().to_string());
        assert_eq!(form.year, today.year().to_string());
        assert_eq!(form.payment_date, today.to_string());
    }
}
