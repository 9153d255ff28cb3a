mod error;
mod filters;
mod index;
mod mutations;
mod queries;
mod store;

pub use error::EngineError;
pub use filters::{date_range_overlaps, department_matches, matches_filters, name_matches};
pub use index::build_vacation_data;
pub use store::RequestStore;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::warn;

use crate::model::{LeaveRequest, RequestEvent};
use crate::persist::RequestWriter;

/// The leave-request engine: a locked `RequestStore` plus the durable-write
/// seam. Queries are pure reads over the current snapshot; mutations write
/// through `RequestWriter` first and only then touch the store, so the
/// snapshot never claims a state the backend refused.
pub struct Engine {
    state: RwLock<RequestStore>,
    writer: Arc<dyn RequestWriter>,
    /// Bumped on every applied mutation; keys caller-side memoization.
    version: AtomicU64,
}

impl Engine {
    pub fn new(writer: Arc<dyn RequestWriter>) -> Self {
        Self {
            state: RwLock::new(RequestStore::new()),
            writer,
            version: AtomicU64::new(0),
        }
    }

    /// Seed the engine with records already persisted upstream (nothing is
    /// written through the seam). Rejects records violating the
    /// `start <= end` invariant.
    pub fn with_requests(
        writer: Arc<dyn RequestWriter>,
        requests: Vec<LeaveRequest>,
    ) -> Result<Self, EngineError> {
        for request in &requests {
            if request.end_date < request.start_date {
                return Err(EngineError::InvalidSpan {
                    start: request.start_date,
                    end: request.end_date,
                });
            }
        }
        Ok(Self {
            state: RwLock::new(RequestStore::with_requests(requests)),
            writer,
            version: AtomicU64::new(0),
        })
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    pub(super) fn bump_version(&self) {
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Durable write, ahead of any in-memory change. The caller must hold
    /// the store's write lock across this so no half-applied state is
    /// observable.
    pub(super) async fn persist(&self, event: &RequestEvent) -> Result<(), EngineError> {
        self.writer.write(event).await.inspect_err(|e| {
            warn!(error = %e, "durable write failed; store left unchanged");
        })
    }
}
