//! Designation endpoints

use shared::models::{Designation, DesignationPayload};

use super::PaydayClient;
use crate::{ApiResult, HttpClient};

impl<C: HttpClient> PaydayClient<C> {
    /// List designations (unpaginated array).
    pub async fn list_designations(&self) -> ApiResult<Vec<Designation>> {
        self.http.get("designations").await
    }

    pub async fn create_designation(
        &self,
        payload: &DesignationPayload,
    ) -> ApiResult<Designation> {
        self.http.post("designations", payload).await
    }

    pub async fn delete_designation(&self, id: &str) -> ApiResult<()> {
        self.http.delete(&format!("designations/{id}")).await
    }
}
