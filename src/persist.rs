//! The durable-write seam. The engine never talks to a backend directly:
//! every mutation is handed to a `RequestWriter` before the in-memory store
//! is touched, so a failed write leaves the snapshot at its pre-change
//! value. Callers plug in whatever backend they persist through.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::engine::EngineError;
use crate::model::RequestEvent;

#[async_trait]
pub trait RequestWriter: Send + Sync {
    /// Durably record `event`. An `Err` means nothing was written and the
    /// engine must not apply the change. No retry happens at this layer.
    async fn write(&self, event: &RequestEvent) -> Result<(), EngineError>;
}

/// Writer for callers that persist through their own channel (or not at
/// all) and only want the in-memory snapshot.
pub struct NoopWriter;

#[async_trait]
impl RequestWriter for NoopWriter {
    async fn write(&self, _event: &RequestEvent) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Records every event in order. Backend double for tests and demos.
#[derive(Default)]
pub struct MemoryWriter {
    events: Mutex<Vec<RequestEvent>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<RequestEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl RequestWriter for MemoryWriter {
    async fn write(&self, event: &RequestEvent) -> Result<(), EngineError> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
