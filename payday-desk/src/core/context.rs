//! Desk context: entity stores and loaders
//!
//! One `DeskContext` per session owns the transient entity lists. Loads
//! replace a list wholesale ("last fetch wins"); a failed load resets the
//! list to empty so the view falls back to its explicit "none found" state
//! instead of silently showing stale rows. A late response from an
//! abandoned load still lands (last-write-wins); there is no cancellation.

use payday_client::{ApiError, DEFAULT_PAGE_SIZE, HttpClient, PaydayClient};
use shared::models::{Department, Designation, Employee, Payroll};

use crate::core::dashboard::DashboardStats;
use crate::core::error::DeskError;
use crate::core::notify::NoticeLog;

/// Session-scoped state behind the admin pages
pub struct DeskContext<C: HttpClient> {
    client: PaydayClient<C>,
    /// Pending user-facing notifications
    pub notices: NoticeLog,
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub designations: Vec<Designation>,
    pub payrolls: Vec<Payroll>,
    pub stats: DashboardStats,
}

impl<C: HttpClient> DeskContext<C> {
    pub fn new(client: PaydayClient<C>) -> Self {
        Self {
            client,
            notices: NoticeLog::default(),
            employees: Vec::new(),
            departments: Vec::new(),
            designations: Vec::new(),
            payrolls: Vec::new(),
            stats: DashboardStats::default(),
        }
    }

    pub fn client(&self) -> &PaydayClient<C> {
        &self.client
    }

    /// Shared notification path for request failures: one notice per
    /// observed error, mirroring the transport log already written by the
    /// client.
    pub(crate) fn report(&mut self, err: &ApiError) {
        self.notices.error(format!("Error: {err}"));
    }

    pub async fn load_employees(&mut self) -> Result<(), DeskError> {
        match self.client.list_employees(0, DEFAULT_PAGE_SIZE).await {
            Ok(listing) => {
                self.employees = listing.into_items();
                Ok(())
            }
            Err(e) => {
                self.employees.clear();
                self.report(&e);
                Err(e.into())
            }
        }
    }

    pub async fn load_departments(&mut self) -> Result<(), DeskError> {
        match self.client.list_departments().await {
            Ok(departments) => {
                self.departments = departments;
                Ok(())
            }
            Err(e) => {
                self.departments.clear();
                self.report(&e);
                Err(e.into())
            }
        }
    }

    pub async fn load_designations(&mut self) -> Result<(), DeskError> {
        match self.client.list_designations().await {
            Ok(designations) => {
                self.designations = designations;
                Ok(())
            }
            Err(e) => {
                self.designations.clear();
                self.report(&e);
                Err(e.into())
            }
        }
    }

    pub async fn load_payrolls(&mut self) -> Result<(), DeskError> {
        match self.client.list_payrolls(0, DEFAULT_PAGE_SIZE).await {
            Ok(listing) => {
                self.payrolls = listing.into_items();
                Ok(())
            }
            Err(e) => {
                self.payrolls.clear();
                self.report(&e);
                Err(e.into())
            }
        }
    }

    /// Look up an employee in the local store (stale-reference aware).
    pub fn employee(&self, id: &str) -> Result<&Employee, DeskError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DeskError::NotFound {
                what: "employee",
                id: id.to_string(),
            })
    }

    /// Look up a payroll record in the local store.
    pub fn payroll(&self, id: &str) -> Result<&Payroll, DeskError> {
        self.payrolls
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DeskError::NotFound {
                what: "payroll",
                id: id.to_string(),
            })
    }
}
