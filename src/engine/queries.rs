use std::collections::HashSet;

use ulid::Ulid;

use crate::model::{
    DepartmentMap, Employee, FilterState, LeaveRequest, LeaveStatus, StatusCounts, VacationData,
};

use super::filters::validate_filters;
use super::index::build_vacation_data;
use super::{Engine, EngineError};

impl Engine {
    /// Owned copy of the current request set, in insertion order.
    pub async fn snapshot(&self) -> Vec<LeaveRequest> {
        self.state.read().await.snapshot()
    }

    pub async fn get_request(&self, id: &Ulid) -> Option<LeaveRequest> {
        self.state.read().await.get(id).cloned()
    }

    pub async fn request_count(&self) -> usize {
        self.state.read().await.len()
    }

    /// Filtered list plus day index over the current snapshot. Rejects an
    /// inverted filter window; everything else is delegated to the pure
    /// indexer.
    pub async fn vacation_data(
        &self,
        filters: &FilterState,
        departments: &DepartmentMap,
    ) -> Result<VacationData, EngineError> {
        validate_filters(filters)?;
        let store = self.state.read().await;
        Ok(build_vacation_data(store.requests(), filters, departments))
    }

    /// Requests in one lifecycle state, for the tab lists.
    pub async fn requests_by_status(&self, status: LeaveStatus) -> Vec<LeaveRequest> {
        self.state.read().await.by_status(status)
    }

    pub async fn status_counts(&self) -> StatusCounts {
        self.state.read().await.status_counts()
    }

    /// Unique employees across ALL requests (any status), in first-seen
    /// order. Drives the employee filter dropdown.
    pub async fn employees(&self) -> Vec<Employee> {
        let store = self.state.read().await;
        let mut seen = HashSet::new();
        let mut employees = Vec::new();
        for request in store.requests() {
            if seen.insert(request.employee.id) {
                employees.push(request.employee.clone());
            }
        }
        employees
    }
}
