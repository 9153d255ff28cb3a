pub mod cache;
pub mod engine;
pub mod limits;
pub mod model;
pub mod persist;

pub use cache::IndexCache;
pub use engine::{Engine, EngineError, RequestStore, build_vacation_data};
pub use model::*;
pub use persist::{MemoryWriter, NoopWriter, RequestWriter};
