//! End-to-end flows over a scripted in-memory transport.
//!
//! The mock records every request it sees, so the tests can assert not
//! just outcomes but that guarded actions issue no request at all.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use payday_client::{ApiError, ApiResult, HttpClient, PaydayClient};
use payday_desk::forms::{EmployeeForm, PayrollForm};
use payday_desk::view::employees_table;
use payday_desk::{DeskContext, DeskError, NoticeLevel};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Default)]
struct MockState {
    employees: Vec<Value>,
    departments: Vec<Value>,
    designations: Vec<Value>,
    payrolls: Vec<Value>,
    log: Vec<String>,
    next_id: u32,
    fail: bool,
}

impl MockState {
    fn collection_mut(&mut self, resource: &str) -> &mut Vec<Value> {
        match resource {
            "employees" => &mut self.employees,
            "departments" => &mut self.departments,
            "designations" => &mut self.designations,
            "payrolls" => &mut self.payrolls,
            other => panic!("unknown resource: {other}"),
        }
    }
}

/// In-memory stand-in for the REST backend.
#[derive(Clone, Default)]
struct MockHttp {
    inner: Arc<Mutex<MockState>>,
}

impl MockHttp {
    fn log(&self) -> Vec<String> {
        self.inner.lock().unwrap().log.clone()
    }

    fn set_fail(&self, fail: bool) {
        self.inner.lock().unwrap().fail = fail;
    }

    fn seed(&self, resource: &str, record: Value) {
        self.inner
            .lock()
            .unwrap()
            .collection_mut(resource)
            .push(record);
    }

    fn paged(items: &[Value]) -> Value {
        json!({
            "content": items,
            "totalElements": items.len(),
            "totalPages": 1,
            "number": 0,
            "size": 100,
        })
    }

    fn fail_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "backend unavailable".into(),
        }
    }
}

fn split_path(path: &str) -> Vec<&str> {
    let without_query = path.split('?').next().unwrap_or(path);
    without_query.split('/').collect()
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let mut state = self.inner.lock().unwrap();
        state.log.push(format!("GET {path}"));
        if state.fail {
            return Err(Self::fail_error());
        }
        let value = match split_path(path)[0] {
            "employees" => Self::paged(&state.employees),
            "payrolls" => Self::paged(&state.payrolls),
            "departments" => Value::Array(state.departments.clone()),
            "designations" => Value::Array(state.designations.clone()),
            other => panic!("unexpected GET {other}"),
        };
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let mut state = self.inner.lock().unwrap();
        state.log.push(format!("POST {path}"));
        if state.fail {
            return Err(Self::fail_error());
        }
        let resource = split_path(path)[0].to_string();
        state.next_id += 1;
        let id = format!("{}-{}", resource, state.next_id);
        let mut record = serde_json::to_value(body).unwrap();
        record["id"] = json!(id);
        state.collection_mut(&resource).push(record.clone());
        Ok(serde_json::from_value(record).unwrap())
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let mut state = self.inner.lock().unwrap();
        state.log.push(format!("PUT {path}"));
        if state.fail {
            return Err(Self::fail_error());
        }
        let parts = split_path(path);
        let (resource, id) = (parts[0].to_string(), parts[1].to_string());
        let mut record = serde_json::to_value(body).unwrap();
        record["id"] = json!(&id);
        let collection = state.collection_mut(&resource);
        match collection
            .iter_mut()
            .find(|r| r["id"].as_str() == Some(id.as_str()))
        {
            Some(existing) => *existing = record.clone(),
            None => {
                return Err(ApiError::Status {
                    status: 404,
                    message: format!("{resource} not found"),
                });
            }
        }
        Ok(serde_json::from_value(record).unwrap())
    }

    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let mut state = self.inner.lock().unwrap();
        state.log.push(format!("PATCH {path}"));
        if state.fail {
            return Err(Self::fail_error());
        }
        let parts = split_path(path);
        let (id, action) = (parts[1].to_string(), parts[2].to_string());
        let approved_by = query
            .iter()
            .find(|(k, _)| *k == "approvedBy")
            .map(|(_, v)| v.to_string());
        let record = state
            .payrolls
            .iter_mut()
            .find(|r| r["id"].as_str() == Some(id.as_str()))
            .unwrap_or_else(|| panic!("payroll {id} not found"));
        match action.as_str() {
            "approve" => {
                record["paymentStatus"] = json!("APPROVED");
                record["approvedBy"] = json!(approved_by);
            }
            "process-payment" => record["paymentStatus"] = json!("PAID"),
            other => panic!("unexpected PATCH action {other}"),
        }
        Ok(serde_json::from_value(record.clone()).unwrap())
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let mut state = self.inner.lock().unwrap();
        state.log.push(format!("DELETE {path}"));
        if state.fail {
            return Err(Self::fail_error());
        }
        let parts = split_path(path);
        let (resource, id) = (parts[0].to_string(), parts[1].to_string());
        let collection = state.collection_mut(&resource);
        let before = collection.len();
        collection.retain(|r| r["id"].as_str() != Some(id.as_str()));
        if collection.len() == before {
            return Err(ApiError::Status {
                status: 404,
                message: format!("{resource} not found"),
            });
        }
        Ok(())
    }
}

fn desk() -> (MockHttp, DeskContext<MockHttp>) {
    let mock = MockHttp::default();
    let ctx = DeskContext::new(PaydayClient::new(mock.clone()));
    (mock, ctx)
}

fn valid_employee_form() -> EmployeeForm {
    EmployeeForm {
        employee_code: "EMP-001".into(),
        first_name: "Asha".into(),
        last_name: "Rao".into(),
        email: "asha.rao@example.com".into(),
        phone: "+919876543210".into(),
        date_of_birth: "1990-04-02".into(),
        hire_date: "2021-07-15".into(),
        department_id: "D1".into(),
        designation_id: "G1".into(),
        salary: "85000".into(),
        address: "12 Lake Road".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn invalid_form_issues_no_request() {
    let (mock, mut ctx) = desk();

    let mut form = valid_employee_form();
    form.email = "not-an-email".into();

    let err = form.submit(&mut ctx).await.unwrap_err();
    assert!(matches!(err, DeskError::Form(_)));
    assert!(mock.log().is_empty());
    // The form keeps its values for correction.
    assert_eq!(form.first_name, "Asha");
}

#[tokio::test]
async fn create_employee_reloads_list_and_counts() {
    let (mock, mut ctx) = desk();

    let mut form = valid_employee_form();
    form.submit(&mut ctx).await.unwrap();

    let log = mock.log();
    assert_eq!(log[0], "POST employees");
    assert!(log[1].starts_with("GET employees"));

    assert_eq!(ctx.employees.len(), 1);
    assert_eq!(ctx.employees[0].employee_code, "EMP-001");
    assert_eq!(ctx.stats.total_employees, 1);
    assert_eq!(
        ctx.notices.last().unwrap().message,
        "Employee created successfully!"
    );
    // Successful submit resets the form.
    assert!(form.employee_code.is_empty());
    assert!(form.editing_id.is_none());
}

#[tokio::test]
async fn edit_employee_sends_put_with_same_id() {
    let (mock, mut ctx) = desk();

    valid_employee_form().submit(&mut ctx).await.unwrap();
    let id = ctx.employees[0].id.clone();

    let mut form = EmployeeForm::edit(&ctx.employees[0]);
    form.first_name = "Ashita".into();
    form.submit(&mut ctx).await.unwrap();

    assert!(mock.log().contains(&format!("PUT employees/{id}")));
    assert_eq!(ctx.employees.len(), 1);
    assert_eq!(ctx.employees[0].first_name, "Ashita");
    assert_eq!(ctx.employees[0].id, id);
}

#[tokio::test]
async fn declined_confirmation_issues_no_request() {
    let (mock, mut ctx) = desk();
    valid_employee_form().submit(&mut ctx).await.unwrap();
    let id = ctx.employees[0].id.clone();
    let before = mock.log().len();

    let deleted = ctx.delete_employee(&id, |_| false).await.unwrap();

    assert!(!deleted);
    assert_eq!(mock.log().len(), before);
    assert_eq!(ctx.employees.len(), 1);
}

#[tokio::test]
async fn confirmed_delete_removes_and_reloads() {
    let (mock, mut ctx) = desk();
    valid_employee_form().submit(&mut ctx).await.unwrap();
    let id = ctx.employees[0].id.clone();

    let deleted = ctx
        .delete_employee(&id, |prompt| {
            assert!(prompt.contains("delete this employee"));
            true
        })
        .await
        .unwrap();

    assert!(deleted);
    assert!(mock.log().contains(&format!("DELETE employees/{id}")));
    assert!(ctx.employees.is_empty());
    assert_eq!(ctx.stats.total_employees, 0);
}

#[tokio::test]
async fn failed_load_clears_list_and_reports() {
    let (mock, mut ctx) = desk();
    valid_employee_form().submit(&mut ctx).await.unwrap();
    assert_eq!(ctx.employees.len(), 1);

    mock.set_fail(true);
    let err = ctx.load_employees().await.unwrap_err();
    assert!(matches!(err, DeskError::Api(_)));

    // The stale rows are gone and the view falls back to its empty state.
    assert!(ctx.employees.is_empty());
    assert_eq!(
        employees_table(&ctx.employees).to_string(),
        "No employees found\n"
    );
    let notice = ctx.notices.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("backend unavailable"));
}

#[tokio::test]
async fn payroll_flow_runs_pending_approved_paid() {
    let (mock, mut ctx) = desk();
    valid_employee_form().submit(&mut ctx).await.unwrap();

    let mut form = PayrollForm::new();
    form.autofill_from(&ctx.employees[0]);
    assert_eq!(form.basic_salary, "85000");
    form.submit(&mut ctx).await.unwrap();

    assert_eq!(ctx.payrolls.len(), 1);
    let id = ctx.payrolls[0].id.clone();
    // No net salary on the record yet, so display falls back to basic.
    assert_eq!(ctx.payrolls[0].net_or_basic(), "85000".parse().unwrap());

    let approved = ctx.approve_payroll(&id, "admin").await.unwrap();
    assert!(approved);
    assert!(mock.log().contains(&format!("PATCH payrolls/{id}/approve")));
    assert_eq!(ctx.payrolls[0].approved_by.as_deref(), Some("admin"));
    assert!(!ctx.payrolls[0].can_approve());

    let paid = ctx.process_payment(&id).await.unwrap();
    assert!(paid);
    assert!(!ctx.payrolls[0].can_process_payment());
}

#[tokio::test]
async fn approve_is_a_no_op_once_approved() {
    let (mock, mut ctx) = desk();
    valid_employee_form().submit(&mut ctx).await.unwrap();

    let mut form = PayrollForm::new();
    form.autofill_from(&ctx.employees[0]);
    form.submit(&mut ctx).await.unwrap();
    let id = ctx.payrolls[0].id.clone();
    ctx.approve_payroll(&id, "admin").await.unwrap();

    let before = mock.log().len();
    let approved = ctx.approve_payroll(&id, "admin").await.unwrap();
    assert!(!approved);
    assert_eq!(mock.log().len(), before);
}

#[tokio::test]
async fn payment_is_a_no_op_once_paid() {
    let (mock, mut ctx) = desk();
    valid_employee_form().submit(&mut ctx).await.unwrap();

    let mut form = PayrollForm::new();
    form.autofill_from(&ctx.employees[0]);
    form.submit(&mut ctx).await.unwrap();
    let id = ctx.payrolls[0].id.clone();
    ctx.process_payment(&id).await.unwrap();

    let before = mock.log().len();
    let paid = ctx.process_payment(&id).await.unwrap();
    assert!(!paid);
    assert_eq!(mock.log().len(), before);
}

#[tokio::test]
async fn unknown_payroll_id_is_reported_not_sent() {
    let (mock, mut ctx) = desk();

    let err = ctx.approve_payroll("P404", "admin").await.unwrap_err();
    assert!(matches!(err, DeskError::NotFound { .. }));
    assert!(mock.log().is_empty());
}

#[tokio::test]
async fn dashboard_counts_come_from_page_metadata() {
    let (mock, mut ctx) = desk();
    mock.seed("departments", json!({"id": "D1", "code": "ENG", "name": "Engineering"}));
    mock.seed("departments", json!({"id": "D2", "code": "FIN", "name": "Finance"}));
    mock.seed("designations", json!({"id": "G1", "code": "SE", "title": "Engineer"}));
    valid_employee_form().submit(&mut ctx).await.unwrap();

    ctx.load_dashboard().await.unwrap();

    assert_eq!(ctx.stats.total_employees, 1);
    assert_eq!(ctx.stats.total_departments, 2);
    assert_eq!(ctx.stats.total_designations, 1);
    assert_eq!(ctx.stats.total_payrolls, 0);
}
