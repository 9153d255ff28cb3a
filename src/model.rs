use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Employee id → department name, owned by the external identity system.
/// The core only ever reads it.
pub type DepartmentMap = HashMap<Ulid, String>;

/// Department query value that disables department filtering.
pub const ALL_DEPARTMENTS: &str = "all";

/// Closed interval of calendar days `[start, end]` — time of day is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateSpan start must not be after end");
        Self { start, end }
    }

    /// Number of calendar days covered, both endpoints included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Inclusive overlap: the spans share at least one calendar day.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    /// Walk every covered day, one calendar day at a time (never 24h
    /// arithmetic, so DST shifts can't skip or duplicate a day).
    /// Empty when `end < start` — a malformed span contributes nothing.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Lifecycle state of a leave request. Every state is reachable from every
/// other state — managers can override earlier decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Denied,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to an employee; identity and department assignment live
/// in the external identity system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Ulid,
    pub name: String,
}

/// One employee's request for time off over a contiguous date span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Ulid,
    pub employee: Employee,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub reason: String,
    /// Set when a reason accompanies a transition into `Denied`; retained
    /// across later transitions (stale reasons are kept, not cleared).
    pub denial_reason: Option<String>,
    pub requested_on: DateTime<Utc>,
}

impl LeaveRequest {
    /// The requested date span. Built without the `start <= end` assertion so
    /// malformed records degrade to an empty day walk instead of panicking.
    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Input to the submission flow. The caller owns id allocation and the
/// creation timestamp; the engine stamps status and denial reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmission {
    pub id: Ulid,
    pub employee: Employee,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub requested_on: DateTime<Utc>,
}

/// Status-change intent handed to the persistence seam before the in-memory
/// store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub request_id: Ulid,
    pub new_status: LeaveStatus,
    pub reason: Option<String>,
}

/// The record types written through `RequestWriter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestEvent {
    Submitted { request: LeaveRequest },
    StatusChanged { change: StatusChange },
}

/// Optional calendar window for filtering. Only constrains when BOTH bounds
/// are set; a half-set range imposes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRangeFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Transient filter input from the view layer. Hashable so it can key the
/// memo cache. `Default` means "no filters active".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    /// Case-insensitive substring match on the employee name; empty = off.
    pub employee: String,
    /// Exact department name; empty or `"all"` = off.
    pub department: String,
    pub range: DateRangeFilter,
}

// ── Query result types ───────────────────────────────────────────

/// ISO `yyyy-MM-dd` key for one calendar day.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Output of the vacation indexer: the filtered request list plus a
/// day-keyed lookup over it. Requests are shared between the list and the
/// day buckets, in filtered-list order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationData {
    pub filtered: Vec<Arc<LeaveRequest>>,
    pub index: BTreeMap<String, Vec<Arc<LeaveRequest>>>,
}

impl VacationData {
    /// Whether any approved, filter-matching leave touches `day`. Drives
    /// calendar day markers.
    pub fn day_has_vacation(&self, day: NaiveDate) -> bool {
        self.index.contains_key(&day_key(day))
    }

    /// Requests covering `day`, in filtered-list order. Drives day-click
    /// popovers.
    pub fn vacations_for_day(&self, day: NaiveDate) -> &[Arc<LeaveRequest>] {
        self.index
            .get(&day_key(day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Per-status request counts for list badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub denied: usize,
}
