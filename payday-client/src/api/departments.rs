//! Department endpoints

use shared::models::{Department, DepartmentPayload};

use super::PaydayClient;
use crate::{ApiResult, HttpClient};

impl<C: HttpClient> PaydayClient<C> {
    /// List departments (unpaginated array).
    pub async fn list_departments(&self) -> ApiResult<Vec<Department>> {
        self.http.get("departments").await
    }

    pub async fn create_department(&self, payload: &DepartmentPayload) -> ApiResult<Department> {
        self.http.post("departments", payload).await
    }

    pub async fn delete_department(&self, id: &str) -> ApiResult<()> {
        self.http.delete(&format!("departments/{id}")).await
    }
}
