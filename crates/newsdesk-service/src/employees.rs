//! Admin employee directory.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;

use newsdesk_core::error::AppError;
use newsdesk_core::pager::PageBar;
use newsdesk_core::types::{SearchTerm, UserId};
use newsdesk_entity::employee::Employee;
use newsdesk_entity::user::{AccountStatus, StatusFilter};

use crate::listing::{Listing, RangeSummary};

/// Header counters of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub blocked: usize,
    /// Mean performance score in whole percent.
    pub average_performance: u32,
}

/// Searchable employee table with block and remove actions.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    search: SearchTerm,
    department: Option<String>,
    status: StatusFilter,
    listing: Listing<Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>, items_per_page: usize) -> Result<Self, AppError> {
        let mut view = Self {
            employees,
            search: SearchTerm::default(),
            department: None,
            status: StatusFilter::All,
            listing: Listing::new(items_per_page)?,
        };
        view.refresh();
        Ok(view)
    }

    /// Search name and email.
    pub fn set_search(&mut self, raw: &str) {
        self.search = SearchTerm::new(raw);
        self.refresh();
    }

    /// Restrict to one department; `all` or blank clears it.
    pub fn set_department(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.department = (!trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("all"))
            .then(|| trimmed.to_string());
        self.refresh();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.refresh();
    }

    fn refresh(&mut self) {
        let rows: Vec<Employee> = self
            .employees
            .iter()
            .filter(|e| self.search.matches_any(&[e.name.as_str(), e.email.as_str()]))
            .filter(|e| {
                self.department
                    .as_deref()
                    .is_none_or(|d| e.department.eq_ignore_ascii_case(d))
            })
            .filter(|e| self.status.matches(e.status()))
            .cloned()
            .collect();
        self.listing.replace_rows(rows);
    }

    /// Flip the blocked flag. Returns the new status.
    pub fn toggle_block(&mut self, id: &UserId) -> Result<AccountStatus, AppError> {
        let index = self.position(id)?;
        let employee = &mut self.employees[index];
        employee.is_blocked = !employee.is_blocked;
        let status = employee.status();
        info!(user_id = %id, status = %status, "Employee status changed");
        self.refresh();
        Ok(status)
    }

    /// Remove an employee from the directory.
    pub fn remove(&mut self, id: &UserId) -> Result<Employee, AppError> {
        let index = self.position(id)?;
        let removed = self.employees.remove(index);
        info!(user_id = %id, "Employee removed");
        self.refresh();
        Ok(removed)
    }

    fn position(&self, id: &UserId) -> Result<usize, AppError> {
        self.employees
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| AppError::not_found(format!("Employee '{id}' not found")))
    }

    /// Counters over the whole directory, unfiltered.
    pub fn stats(&self) -> DirectoryStats {
        let total = self.employees.len();
        let blocked = self.employees.iter().filter(|e| e.is_blocked).count();
        let score_sum: u32 = self.employees.iter().map(Employee::performance_score).sum();
        DirectoryStats {
            total,
            active: total - blocked,
            blocked,
            average_performance: if total == 0 {
                0
            } else {
                (f64::from(score_sum) / total as f64).round() as u32
            },
        }
    }

    /// Distinct departments, sorted.
    pub fn departments(&self) -> Vec<String> {
        self.employees
            .iter()
            .filter(|e| !e.department.is_empty())
            .map(|e| e.department.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn listing(&self) -> &Listing<Employee> {
        &self.listing
    }

    pub fn page_items(&self) -> &[Employee] {
        self.listing.page_items()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.listing.go_to_page(page)
    }

    pub fn page_bar(&self) -> PageBar {
        self.listing.page_bar()
    }

    pub fn summary(&self) -> Option<RangeSummary> {
        self.listing.summary()
    }
}
