use chrono::NaiveDate;
use ulid::Ulid;

#[derive(Debug)]
pub enum EngineError {
    NotFound(Ulid),
    AlreadyExists(Ulid),
    InvalidSpan { start: NaiveDate, end: NaiveDate },
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
    LimitExceeded(&'static str),
    Persistence(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(id) => write!(f, "request not found: {id}"),
            EngineError::AlreadyExists(id) => write!(f, "request already exists: {id}"),
            EngineError::InvalidSpan { start, end } => {
                write!(f, "invalid span: start {start} is after end {end}")
            }
            EngineError::InvalidDateRange { from, to } => {
                write!(f, "invalid filter range: from {from} is after to {to}")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            EngineError::Persistence(e) => write!(f, "persistence error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}
