//! Mutating list actions: deletes and payroll status transitions
//!
//! Every action follows the same sequence: guard → request → notice →
//! reload the dependent lists. The reload never starts before the
//! mutating call has resolved, and nothing is updated optimistically.
//!
//! Deletes take a confirmation callback; if it declines, no request is
//! issued. Payroll transitions return `Ok(false)` when the trigger is
//! disabled for the record's current status.

use payday_client::HttpClient;

use crate::core::context::DeskContext;
use crate::core::error::DeskError;

impl<C: HttpClient> DeskContext<C> {
    pub async fn delete_employee(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool, DeskError> {
        if !confirm("Are you sure you want to delete this employee?") {
            return Ok(false);
        }
        match self.client().delete_employee(id).await {
            Ok(()) => {
                self.notices.success("Employee deleted successfully!");
                self.load_employees().await?;
                self.load_dashboard().await?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }

    pub async fn delete_department(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool, DeskError> {
        if !confirm("Are you sure you want to delete this department?") {
            return Ok(false);
        }
        match self.client().delete_department(id).await {
            Ok(()) => {
                self.notices.success("Department deleted successfully!");
                self.load_departments().await?;
                self.load_dashboard().await?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }

    pub async fn delete_designation(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool, DeskError> {
        if !confirm("Are you sure you want to delete this designation?") {
            return Ok(false);
        }
        match self.client().delete_designation(id).await {
            Ok(()) => {
                self.notices.success("Designation deleted successfully!");
                self.load_designations().await?;
                self.load_dashboard().await?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }

    pub async fn delete_payroll(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool, DeskError> {
        if !confirm("Are you sure you want to delete this payroll?") {
            return Ok(false);
        }
        match self.client().delete_payroll(id).await {
            Ok(()) => {
                self.notices.success("Payroll deleted successfully!");
                self.load_payrolls().await?;
                self.load_dashboard().await?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }

    /// Approve a pending payroll, recording who approved it.
    ///
    /// Disabled once the record is already APPROVED or PAID: returns
    /// `Ok(false)` without issuing a request.
    pub async fn approve_payroll(
        &mut self,
        id: &str,
        approved_by: &str,
    ) -> Result<bool, DeskError> {
        if !self.payroll(id)?.can_approve() {
            return Ok(false);
        }
        match self.client().approve_payroll(id, approved_by).await {
            Ok(_) => {
                self.notices.success("Payroll approved successfully!");
                self.load_payrolls().await?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }

    /// Process payment for a payroll record. Disabled once PAID.
    pub async fn process_payment(&mut self, id: &str) -> Result<bool, DeskError> {
        if !self.payroll(id)?.can_process_payment() {
            return Ok(false);
        }
        match self.client().process_payment(id).await {
            Ok(_) => {
                self.notices.success("Payment processed successfully!");
                self.load_payrolls().await?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }
}
