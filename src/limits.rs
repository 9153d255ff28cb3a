//! Hard input-size guards. These cap what the engine will accept, keeping
//! the day walk and the store bounded no matter what the caller feeds in.

/// Widest accepted leave span, in calendar days.
pub const MAX_SPAN_DAYS: i64 = 366;

/// Longest accepted free-text reason.
pub const MAX_REASON_LEN: usize = 2_000;

/// Longest accepted employee name.
pub const MAX_NAME_LEN: usize = 200;

/// Most requests a single store will hold.
pub const MAX_REQUESTS_PER_STORE: usize = 100_000;
