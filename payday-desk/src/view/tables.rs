//! Table and stat-card builders

use rust_decimal::Decimal;
use shared::models::{Department, Designation, Employee, Payroll};
use shared::util::month_name;

use super::TableView;
use crate::core::DashboardStats;

fn money(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

pub fn employees_table(employees: &[Employee]) -> TableView {
    TableView {
        columns: vec!["Code", "Name", "Email", "Department", "Designation", "Salary"],
        rows: employees
            .iter()
            .map(|e| {
                vec![
                    e.employee_code.clone(),
                    e.full_name(),
                    e.email.clone(),
                    or_na(e.department_name.as_deref()),
                    or_na(e.designation_title.as_deref()),
                    money(e.base_salary),
                ]
            })
            .collect(),
        empty_message: "No employees found",
    }
}

pub fn departments_table(departments: &[Department]) -> TableView {
    TableView {
        columns: vec!["Code", "Name", "Description"],
        rows: departments
            .iter()
            .map(|d| {
                vec![
                    d.code.clone(),
                    d.name.clone(),
                    or_na(d.description.as_deref()),
                ]
            })
            .collect(),
        empty_message: "No departments found",
    }
}

pub fn designations_table(designations: &[Designation]) -> TableView {
    TableView {
        columns: vec!["Code", "Title", "Min Salary", "Max Salary"],
        rows: designations
            .iter()
            .map(|d| {
                vec![
                    d.code.clone(),
                    d.title.clone(),
                    d.min_salary.map(money).unwrap_or_else(|| "N/A".into()),
                    d.max_salary.map(money).unwrap_or_else(|| "N/A".into()),
                ]
            })
            .collect(),
        empty_message: "No designations found",
    }
}

pub fn payrolls_table(payrolls: &[Payroll]) -> TableView {
    TableView {
        columns: vec!["Employee", "Period", "Basic", "Net", "Status", "Method"],
        rows: payrolls
            .iter()
            .map(|p| {
                let employee = match (&p.employee_name, &p.employee_code) {
                    (Some(name), Some(code)) => format!("{name} ({code})"),
                    (Some(name), None) => name.clone(),
                    (None, Some(code)) => code.clone(),
                    (None, None) => "N/A".to_string(),
                };
                vec![
                    employee,
                    format!("{} {}", month_name(p.month), p.year),
                    money(p.basic_salary),
                    money(p.net_or_basic()),
                    p.payment_status.to_string(),
                    p.payment_method
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "N/A".into()),
                ]
            })
            .collect(),
        empty_message: "No payrolls found",
    }
}

/// One dashboard stat card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
}

pub fn dashboard_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Employees",
            value: stats.total_employees,
        },
        StatCard {
            label: "Total Payrolls",
            value: stats.total_payrolls,
        },
        StatCard {
            label: "Departments",
            value: stats.total_departments,
        },
        StatCard {
            label: "Designations",
            value: stats.total_designations,
        },
    ]
}
