use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::error;

/// Bumping this clears every count and voter the next time the service touches the store.
pub const SCHEMA_VERSION: &str = "miradas-2";

pub type Counts = HashMap<String, i64>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("tally store is not configured")]
    Unconfigured,
    #[error("failed to acquire tally lock")]
    LockFailed,
    #[error("tally store operation failed: {0}")]
    Operation(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Operation(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        StoreError::Operation(e.to_string())
    }
}

#[rocket::async_trait]
pub trait TallyStore: Send + Sync {
    /// Brings the store up to date before first use. When the stored schema
    /// version differs from `version`, counts and voters are wiped and the
    /// marker rewritten in one step. Returns whether that happened.
    async fn prepare(&self, version: &str) -> Result<bool, StoreError>;

    async fn counts(&self) -> Result<Counts, StoreError>;

    /// Moves `name`'s vote to `king_id` and returns the refreshed counts.
    /// A voter switching kings takes their vote with them; repeating the same
    /// king leaves the tally unchanged.
    async fn record_vote(&self, name: &str, king_id: &str) -> Result<Counts, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryTally {
    counts: Counts,
    voters: HashMap<String, String>,
    version: Option<String>,
}

impl MemoryTally {
    fn apply(&mut self, name: &str, king_id: &str) {
        let previous = self.voters.insert(name.to_string(), king_id.to_string());
        match previous {
            Some(previous) if previous == king_id => {}
            Some(previous) => {
                *self.counts.entry(previous).or_insert(0) -= 1;
                *self.counts.entry(king_id.to_string()).or_insert(0) += 1;
            }
            None => *self.counts.entry(king_id.to_string()).or_insert(0) += 1,
        }
    }
}

/// Single-process tally kept behind one mutex, so every vote applies atomically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryTally>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryTally>, StoreError> {
        self.inner.lock().map_err(|e| {
            error!("Failed to acquire tally lock: {}", e);
            StoreError::LockFailed
        })
    }

    pub fn voter(&self, name: &str) -> Option<String> {
        self.lock().ok()?.voters.get(name).cloned()
    }

    pub fn voter_count(&self) -> usize {
        self.lock().map(|tally| tally.voters.len()).unwrap_or(0)
    }
}

#[rocket::async_trait]
impl TallyStore for MemoryStore {
    async fn prepare(&self, version: &str) -> Result<bool, StoreError> {
        let mut tally = self.lock()?;
        if tally.version.as_deref() == Some(version) {
            return Ok(false);
        }
        tally.counts.clear();
        tally.voters.clear();
        tally.version = Some(version.to_string());
        Ok(true)
    }

    async fn counts(&self) -> Result<Counts, StoreError> {
        Ok(self.lock()?.counts.clone())
    }

    async fn record_vote(&self, name: &str, king_id: &str) -> Result<Counts, StoreError> {
        let mut tally = self.lock()?;
        tally.apply(name, king_id);
        Ok(tally.counts.clone())
    }
}
