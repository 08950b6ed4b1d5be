//! Payroll endpoints
//!
//! Status transitions are dedicated PATCH operations on the backend, not a
//! generic status write.

use shared::Listing;
use shared::models::{Payroll, PayrollPayload};

use super::PaydayClient;
use crate::{ApiResult, HttpClient};

impl<C: HttpClient> PaydayClient<C> {
    /// List payroll records (paginated; may fall back to a bare array).
    pub async fn list_payrolls(&self, page: u32, size: u32) -> ApiResult<Listing<Payroll>> {
        self.http
            .get(&format!("payrolls?page={page}&size={size}"))
            .await
    }

    pub async fn create_payroll(&self, payload: &PayrollPayload) -> ApiResult<Payroll> {
        self.http.post("payrolls", payload).await
    }

    pub async fn delete_payroll(&self, id: &str) -> ApiResult<()> {
        self.http.delete(&format!("payrolls/{id}")).await
    }

    /// PENDING → APPROVED, recording who approved it.
    pub async fn approve_payroll(&self, id: &str, approved_by: &str) -> ApiResult<Payroll> {
        self.http
            .patch(
                &format!("payrolls/{id}/approve"),
                &[("approvedBy", approved_by)],
            )
            .await
    }

    /// Any non-PAID state → PAID.
    pub async fn process_payment(&self, id: &str) -> ApiResult<Payroll> {
        self.http
            .patch(&format!("payrolls/{id}/process-payment"), &[])
            .await
    }
}
