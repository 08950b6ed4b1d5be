//! Employee endpoints

use shared::Listing;
use shared::models::{Employee, EmployeePayload};

use super::PaydayClient;
use crate::{ApiResult, HttpClient};

impl<C: HttpClient> PaydayClient<C> {
    /// List employees (paginated; may fall back to a bare array).
    pub async fn list_employees(&self, page: u32, size: u32) -> ApiResult<Listing<Employee>> {
        self.http
            .get(&format!("employees?page={page}&size={size}"))
            .await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> ApiResult<Employee> {
        self.http.post("employees", payload).await
    }

    /// Idempotent replace of an existing employee.
    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> ApiResult<Employee> {
        self.http.put(&format!("employees/{id}"), payload).await
    }

    pub async fn delete_employee(&self, id: &str) -> ApiResult<()> {
        self.http.delete(&format!("employees/{id}")).await
    }
}
