use crate::model::{ALL_DEPARTMENTS, DateRangeFilter, DepartmentMap, FilterState, LeaveRequest};

use super::EngineError;

// ── Filter predicates ────────────────────────────────────────────
//
// Three independent, total predicates over a request. They compose with
// AND; evaluation order is unobservable, so `matches_filters` short-circuits
// on the first failure.

/// Case-insensitive substring match on the employee name. An empty query
/// matches everything.
pub fn name_matches(request: &LeaveRequest, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    request
        .employee
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Exact department match via the injected lookup. An empty or `"all"`
/// query matches everything; an employee missing from the map matches
/// nothing else.
pub fn department_matches(request: &LeaveRequest, query: &str, departments: &DepartmentMap) -> bool {
    if query.is_empty() || query == ALL_DEPARTMENTS {
        return true;
    }
    departments
        .get(&request.employee.id)
        .is_some_and(|dept| dept == query)
}

/// Inclusive overlap against the filter window. The window only constrains
/// when both bounds are set: a request survives iff it shares at least one
/// calendar day with `[from, to]`.
pub fn date_range_overlaps(request: &LeaveRequest, range: &DateRangeFilter) -> bool {
    match (range.from, range.to) {
        (Some(from), Some(to)) => request.end_date >= from && request.start_date <= to,
        _ => true,
    }
}

/// All three predicates, ANDed.
pub fn matches_filters(
    request: &LeaveRequest,
    filters: &FilterState,
    departments: &DepartmentMap,
) -> bool {
    name_matches(request, &filters.employee)
        && department_matches(request, &filters.department, departments)
        && date_range_overlaps(request, &filters.range)
}

/// Boundary check for filter input: an inverted window is a caller error,
/// not something to silently index against.
pub(super) fn validate_filters(filters: &FilterState) -> Result<(), EngineError> {
    if let (Some(from), Some(to)) = (filters.range.from, filters.range.to)
        && from > to
    {
        return Err(EngineError::InvalidDateRange { from, to });
    }
    Ok(())
}
