//! Employee form controller
//!
//! The one place where the UI's display-oriented field names meet the
//! backend's persistence-oriented ones: `hire_date` ↔ `joiningDate`,
//! `salary` ↔ `baseSalary`, `phone` ↔ `phoneNumber`, free-text `address` ↔
//! `address.streetAddress`. `edit` and `to_payload` are the two directions
//! of that mapping; keep them in sync.

use payday_client::HttpClient;
use shared::models::{Address, Employee, EmployeePayload, EmploymentStatus, EmploymentType};

use super::{FormError, check, parse_date, parse_money, require};
use crate::core::{DeskContext, DeskError};

/// Employee create/edit form
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    /// Present in edit mode; submit becomes an idempotent replace
    pub editing_id: Option<String>,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub hire_date: String,
    pub department_id: String,
    pub designation_id: String,
    pub salary: String,
    pub address: String,
    pub status: EmploymentStatus,
    pub employment_type: EmploymentType,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the form from an existing record (backend → UI names).
    pub fn edit(employee: &Employee) -> Self {
        Self {
            editing_id: Some(employee.id.clone()),
            employee_code: employee.employee_code.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone_number.clone().unwrap_or_default(),
            date_of_birth: employee
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
            hire_date: employee
                .joining_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            department_id: employee.department_id.clone().unwrap_or_default(),
            designation_id: employee.designation_id.clone().unwrap_or_default(),
            salary: employee.base_salary.to_string(),
            address: employee
                .address
                .as_ref()
                .map(|a| a.street_address.clone())
                .unwrap_or_default(),
            status: employee.status,
            employment_type: employee.employment_type,
        }
    }

    /// Validate and translate into the backend payload (UI → backend
    /// names). Fails fast on the first violation; nothing is sent.
    pub fn to_payload(&self) -> Result<EmployeePayload, FormError> {
        let payload = EmployeePayload {
            employee_code: require("employee code", &self.employee_code)?,
            first_name: require("first name", &self.first_name)?,
            last_name: require("last name", &self.last_name)?,
            email: require("email", &self.email)?,
            phone_number: require("phone", &self.phone)?,
            date_of_birth: parse_date("date of birth", &self.date_of_birth)?,
            joining_date: parse_date("hire date", &self.hire_date)?,
            department_id: require("department", &self.department_id)?,
            designation_id: require("designation", &self.designation_id)?,
            base_salary: parse_money("salary", &self.salary)?,
            status: self.status,
            employment_type: self.employment_type,
            address: Address::from_street(self.address.trim()),
        };
        check(&payload)?;
        Ok(payload)
    }

    /// Submit the form: update when editing, create otherwise. On success
    /// the form resets and the employee list and dashboard counts reload;
    /// on failure the form keeps its values so the user can correct and
    /// retry.
    pub async fn submit<C: HttpClient>(
        &mut self,
        ctx: &mut DeskContext<C>,
    ) -> Result<(), DeskError> {
        let payload = self.to_payload()?;

        let result = match &self.editing_id {
            Some(id) => ctx.client().update_employee(id, &payload).await,
            None => ctx.client().create_employee(&payload).await,
        };

        match result {
            Ok(_) => {
                ctx.notices.success(if self.editing_id.is_some() {
                    "Employee updated successfully!"
                } else {
                    "Employee created successfully!"
                });
                self.reset();
                ctx.load_employees().await?;
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
