//! End-to-end workflow over a small team: seed a request set, approve and
//! deny through the engine, and drive the calendar index and filters the
//! way a dashboard would, with memoized recomputation in front.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use ulid::Ulid;

use leavequest::{
    DateRangeFilter, DepartmentMap, Employee, FilterState, IndexCache, LeaveRequest, LeaveStatus,
    MemoryWriter, RequestEvent,
};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

struct Team {
    engine: leavequest::Engine,
    writer: Arc<MemoryWriter>,
    departments: DepartmentMap,
    requests: Vec<LeaveRequest>,
}

/// Five employees across four departments, mixed statuses.
fn seed_team() -> Team {
    let people = [
        ("John Doe", "Engineering"),
        ("Jane Smith", "Marketing"),
        ("Mike Johnson", "Sales"),
        ("Sarah Williams", "HR"),
        ("David Brown", "Engineering"),
    ];
    let employees: Vec<Employee> = people
        .iter()
        .map(|(name, _)| Employee {
            id: Ulid::new(),
            name: (*name).to_string(),
        })
        .collect();
    let departments: DepartmentMap = employees
        .iter()
        .zip(people.iter())
        .map(|(e, (_, dept))| (e.id, (*dept).to_string()))
        .collect();

    let spans = [
        ("2023-07-10", "2023-07-15", LeaveStatus::Pending),
        ("2023-08-01", "2023-08-05", LeaveStatus::Approved),
        ("2023-08-20", "2023-08-25", LeaveStatus::Denied),
        ("2023-09-05", "2023-09-15", LeaveStatus::Pending),
        ("2023-10-10", "2023-10-20", LeaveStatus::Approved),
    ];
    let requests: Vec<LeaveRequest> = employees
        .iter()
        .zip(spans.iter())
        .map(|(employee, (start, end, status))| LeaveRequest {
            id: Ulid::new(),
            employee: employee.clone(),
            start_date: d(start),
            end_date: d(end),
            status: *status,
            reason: "planned time off".to_string(),
            denial_reason: None,
            requested_on: Utc.with_ymd_and_hms(2023, 6, 25, 0, 0, 0).unwrap(),
        })
        .collect();

    let writer = Arc::new(MemoryWriter::new());
    let engine = leavequest::Engine::with_requests(writer.clone(), requests.clone()).unwrap();
    Team {
        engine,
        writer,
        departments,
        requests,
    }
}

#[tokio::test]
async fn calendar_reflects_approvals_and_filters() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
    let team = seed_team();
    let cache = IndexCache::default();
    let no_filters = FilterState::default();
    let dept_version = 1u64;

    // Only the two approved requests are on the calendar: 5 + 11 days.
    let data = team
        .engine
        .vacation_data(&no_filters, &team.departments)
        .await
        .unwrap();
    assert_eq!(data.filtered.len(), 2);
    assert_eq!(data.index.len(), 16);
    assert!(data.day_has_vacation(d("2023-08-03")));
    assert!(!data.day_has_vacation(d("2023-07-12")));

    let cached = cache.get_or_build(team.engine.version(), dept_version, &no_filters, || {
        data.clone()
    });

    // Approving John's July request puts six more days on the calendar.
    let john = team.requests[0].id;
    team.engine
        .apply_status_change(john, LeaveStatus::Approved, None)
        .await
        .unwrap();
    let snapshot = team.engine.snapshot().await;
    let data = cache.get_or_build(team.engine.version(), dept_version, &no_filters, || {
        leavequest::build_vacation_data(&snapshot, &no_filters, &team.departments)
    });
    assert!(!Arc::ptr_eq(&cached, &data));
    assert_eq!(data.index.len(), 22);
    assert!(data.day_has_vacation(d("2023-07-12")));

    // Department filter narrows to the two Engineering employees.
    let engineering = FilterState {
        department: "Engineering".into(),
        ..FilterState::default()
    };
    let data = team
        .engine
        .vacation_data(&engineering, &team.departments)
        .await
        .unwrap();
    assert_eq!(data.filtered.len(), 2);
    assert_eq!(data.index.len(), 6 + 11);

    // Name filter is a case-insensitive substring.
    let jane = FilterState {
        employee: "jane".into(),
        ..FilterState::default()
    };
    let data = team
        .engine
        .vacation_data(&jane, &team.departments)
        .await
        .unwrap();
    assert_eq!(data.filtered.len(), 1);
    assert_eq!(data.index.len(), 5);

    // Date window keeps only the overlapping August request.
    let august = FilterState {
        range: DateRangeFilter {
            from: Some(d("2023-08-03")),
            to: Some(d("2023-08-10")),
        },
        ..FilterState::default()
    };
    let data = team
        .engine
        .vacation_data(&august, &team.departments)
        .await
        .unwrap();
    assert_eq!(data.filtered.len(), 1);
    assert_eq!(data.filtered[0].employee.name, "Jane Smith");
}

#[tokio::test]
async fn denial_reason_round_trips_through_the_writer() {
    let team = seed_team();
    let sarah = team.requests[3].id;

    let updated = team
        .engine
        .apply_status_change(
            sarah,
            LeaveStatus::Denied,
            Some("critical project deadline during this period".into()),
        )
        .await
        .unwrap();
    assert_eq!(updated.status, LeaveStatus::Denied);
    assert_eq!(
        updated.denial_reason.as_deref(),
        Some("critical project deadline during this period")
    );

    let events = team.writer.events().await;
    assert_eq!(events.len(), 1);
    match &events[0] {
        RequestEvent::StatusChanged { change } => {
            assert_eq!(change.request_id, sarah);
            assert_eq!(change.new_status, LeaveStatus::Denied);
            assert!(change.reason.is_some());
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let counts = team.engine.status_counts().await;
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.approved, 2);
    assert_eq!(counts.denied, 2);
}
