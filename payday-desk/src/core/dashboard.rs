//! Dashboard aggregate counts
//!
//! Totals for the stat cards. Paginated resources are probed with a
//! size-1 request and read from the page metadata; unpaginated resources
//! count the returned array.

use payday_client::{ApiResult, HttpClient};

use crate::core::context::DeskContext;
use crate::core::error::DeskError;

/// Aggregate counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub total_payrolls: u64,
    pub total_departments: u64,
    pub total_designations: u64,
}

impl<C: HttpClient> DeskContext<C> {
    /// Refresh the dashboard counts. On failure the previous counts are
    /// kept; the error is reported and returned so callers can skip
    /// dependent updates.
    pub async fn load_dashboard(&mut self) -> Result<(), DeskError> {
        match self.fetch_stats().await {
            Ok(stats) => {
                self.stats = stats;
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e.into())
            }
        }
    }

    async fn fetch_stats(&self) -> ApiResult<DashboardStats> {
        let employees = self.client().list_employees(0, 1).await?;
        let payrolls = self.client().list_payrolls(0, 1).await?;
        let departments = self.client().list_departments().await?;
        let designations = self.client().list_designations().await?;

        Ok(DashboardStats {
            total_employees: employees.total_elements(),
            total_payrolls: payrolls.total_elements(),
            total_departments: departments.len() as u64,
            total_designations: designations.len() as u64,
        })
    }
}
