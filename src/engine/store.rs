use ulid::Ulid;

use crate::model::{LeaveRequest, LeaveStatus, StatusCounts};

/// Canonical set of leave requests for a session, kept in insertion order.
/// Plain data — the engine holds it behind a lock, so every method here is
/// synchronous. Insertion order is what makes filtered lists and per-day
/// buckets deterministic.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    requests: Vec<LeaveRequest>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(requests: Vec<LeaveRequest>) -> Self {
        Self { requests }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn contains(&self, id: &Ulid) -> bool {
        self.requests.iter().any(|r| r.id == *id)
    }

    pub fn get(&self, id: &Ulid) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == *id)
    }

    pub fn insert(&mut self, request: LeaveRequest) {
        self.requests.push(request);
    }

    /// Replace the status (and the denial reason, when one is supplied) on
    /// the matching request, leaving every other field untouched. A stored
    /// denial reason is never cleared: transitioning out of `Denied` keeps
    /// the old reason around. Returns the updated record.
    pub fn set_status(
        &mut self,
        id: Ulid,
        new_status: LeaveStatus,
        reason: Option<String>,
    ) -> Option<LeaveRequest> {
        let request = self.requests.iter_mut().find(|r| r.id == id)?;
        request.status = new_status;
        if let Some(reason) = reason {
            request.denial_reason = Some(reason);
        }
        Some(request.clone())
    }

    /// The current requests, in insertion order.
    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> Vec<LeaveRequest> {
        self.requests.clone()
    }

    pub fn by_status(&self, status: LeaveStatus) -> Vec<LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for request in &self.requests {
            match request.status {
                LeaveStatus::Pending => counts.pending += 1,
                LeaveStatus::Approved => counts.approved += 1,
                LeaveStatus::Denied => counts.denied += 1,
            }
        }
        counts
    }
}
