use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a ledger backend.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger backend failure: {0}")]
    Backend(String),

    #[error("write precondition failed for key {0}")]
    PreconditionFailed(String),

    #[error("this ledger does not support conditional writes")]
    GuardUnsupported,
}

/// A value read from the ledger together with the store's version token
/// for its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedValue {
    pub bytes: Vec<u8>,
    /// Per-key write counter; 1 on first put, incremented on every overwrite.
    pub version: u64,
}

/// Condition a write must satisfy to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePrecondition {
    /// Unconditional write.
    None,
    /// Commit only if the key does not exist yet.
    AbsentKey,
    /// Commit only if the key currently exists at exactly this version.
    MatchVersion(u64),
}

impl WritePrecondition {
    /// Evaluate against the current version of a key, if any.
    pub fn check(&self, current: Option<u64>, key: &str) -> Result<(), LedgerError> {
        match (self, current) {
            (WritePrecondition::None, _) => Ok(()),
            (WritePrecondition::AbsentKey, None) => Ok(()),
            (WritePrecondition::MatchVersion(want), Some(have)) if *want == have => Ok(()),
            _ => Err(LedgerError::PreconditionFailed(key.to_string())),
        }
    }
}

/// Key-value surface of the external ledger.
///
/// The registry treats the store behind this trait as the single source of
/// truth; it never caches what it reads. Stores that cannot evaluate write
/// preconditions reject the conditional forms with
/// [`LedgerError::GuardUnsupported`].
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Current value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<VersionedValue>, LedgerError>;

    /// Write `bytes` under `key`, subject to `precondition`.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        precondition: WritePrecondition,
    ) -> Result<(), LedgerError>;

    /// Snapshot of all entries with `start_key <= key < end_key`, in the
    /// store's own iteration order. Empty bounds mean "unbounded" on that
    /// side; the result is finite and not restartable.
    async fn scan(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<(String, VersionedValue)>, LedgerError>;
}

#[async_trait]
impl<T: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<VersionedValue>, LedgerError> {
        (**self).get(key).await
    }

    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        precondition: WritePrecondition,
    ) -> Result<(), LedgerError> {
        (**self).put(key, bytes, precondition).await
    }

    async fn scan(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<(String, VersionedValue)>, LedgerError> {
        (**self).scan(start_key, end_key).await
    }
}
