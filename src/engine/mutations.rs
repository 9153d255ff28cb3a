use tracing::info;
use ulid::Ulid;

use crate::limits::*;
use crate::model::{
    DateSpan, LeaveRequest, LeaveStatus, RequestEvent, RequestSubmission, StatusChange,
};

use super::{Engine, EngineError};

fn validate_submission(submission: &RequestSubmission) -> Result<(), EngineError> {
    if submission.end_date < submission.start_date {
        return Err(EngineError::InvalidSpan {
            start: submission.start_date,
            end: submission.end_date,
        });
    }
    let span = DateSpan::new(submission.start_date, submission.end_date);
    if span.days() > MAX_SPAN_DAYS {
        return Err(EngineError::LimitExceeded("leave span too wide"));
    }
    if submission.reason.len() > MAX_REASON_LEN {
        return Err(EngineError::LimitExceeded("reason too long"));
    }
    if submission.employee.name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("employee name too long"));
    }
    Ok(())
}

impl Engine {
    /// Accept a new leave request. Every request starts life `Pending` with
    /// no denial reason; the submitted record is persisted before it enters
    /// the store.
    pub async fn submit_request(
        &self,
        submission: RequestSubmission,
    ) -> Result<LeaveRequest, EngineError> {
        validate_submission(&submission)?;
        let mut store = self.state.write().await;
        if store.len() >= MAX_REQUESTS_PER_STORE {
            return Err(EngineError::LimitExceeded("too many requests"));
        }
        if store.contains(&submission.id) {
            return Err(EngineError::AlreadyExists(submission.id));
        }

        let request = LeaveRequest {
            id: submission.id,
            employee: submission.employee,
            start_date: submission.start_date,
            end_date: submission.end_date,
            status: LeaveStatus::Pending,
            reason: submission.reason,
            denial_reason: None,
            requested_on: submission.requested_on,
        };

        self.persist(&RequestEvent::Submitted {
            request: request.clone(),
        })
        .await?;
        store.insert(request.clone());
        self.bump_version();
        info!(id = %request.id, employee = %request.employee.name, "leave request submitted");
        Ok(request)
    }

    /// Move a request to `new_status`, storing `reason` as the denial
    /// reason when one is supplied. Any state may move to any other state;
    /// the intent is persisted before the store changes, so a writer
    /// failure leaves the request exactly as it was. Returns the updated
    /// record.
    pub async fn apply_status_change(
        &self,
        request_id: Ulid,
        new_status: LeaveStatus,
        reason: Option<String>,
    ) -> Result<LeaveRequest, EngineError> {
        let mut store = self.state.write().await;
        if !store.contains(&request_id) {
            return Err(EngineError::NotFound(request_id));
        }

        let change = StatusChange {
            request_id,
            new_status,
            reason: reason.clone(),
        };
        self.persist(&RequestEvent::StatusChanged { change }).await?;

        let updated = store
            .set_status(request_id, new_status, reason)
            .ok_or(EngineError::NotFound(request_id))?;
        self.bump_version();
        info!(id = %request_id, status = %new_status, "leave request status changed");
        Ok(updated)
    }
}
