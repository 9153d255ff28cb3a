use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{DepartmentMap, FilterState, LeaveRequest, LeaveStatus, VacationData, day_key};

use super::filters::matches_filters;

// ── Vacation indexer ─────────────────────────────────────────────

/// Turn a flat request snapshot into the filtered list plus a day-keyed
/// index over it. Pure: identical inputs always yield structurally
/// identical output, which is what makes caller-side memoization safe.
///
/// Only approved requests reach the calendar — pending and denied requests
/// are excluded no matter what the filters say. Each survivor is walked one
/// calendar day at a time from `start_date` to `end_date` inclusive and
/// appended to every touched day bucket, so bucket order follows
/// filtered-list order. A request whose `end_date` precedes its
/// `start_date` contributes zero days rather than failing.
pub fn build_vacation_data(
    requests: &[LeaveRequest],
    filters: &FilterState,
    departments: &DepartmentMap,
) -> VacationData {
    let filtered: Vec<Arc<LeaveRequest>> = requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved)
        .filter(|r| matches_filters(r, filters, departments))
        .map(|r| Arc::new(r.clone()))
        .collect();

    let mut index: BTreeMap<String, Vec<Arc<LeaveRequest>>> = BTreeMap::new();
    for request in &filtered {
        for day in request.span().iter_days() {
            index.entry(day_key(day)).or_default().push(Arc::clone(request));
        }
    }

    VacationData { filtered, index }
}
