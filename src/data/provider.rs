use crate::model::{Dependency, Issue, SummaryCounts};

/// One complete flat issue+edge dataset fetched in a single refresh.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub issues: Vec<Issue>,
    pub edges: Vec<Dependency>,
    pub summary: SummaryCounts,
}

/// Error type for snapshot fetching
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("bd {command} failed: {message}")]
    Command { command: String, message: String },
    #[error("could not run bd: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("parse bd {what}: {source}")]
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },
}

/// Source of issue snapshots. Fetches run on a worker thread, so
/// implementations must be shareable across threads.
pub trait DataProvider: Send + Sync {
    fn fetch(&self) -> Result<Snapshot, DataError>;
}
