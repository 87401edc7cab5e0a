use thiserror::Error;

use crate::traits::ledger_store::LedgerError;
use crate::traits::rate_source::RateError;

/// Errors returned by registry operations.
///
/// Every variant carries a distinct reason string; entry points forward
/// these to the invoking runtime unchanged, so the wording here is the
/// wording external callers see.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The ledger could not be read.
    #[error("failed to read from world state: {0}")]
    Read(#[source] LedgerError),

    /// The ledger could not be written.
    #[error("failed to write to world state: {0}")]
    Write(#[source] LedgerError),

    /// Creation was attempted against a key that already holds a record.
    #[error("the property {0} already exists")]
    DuplicateId(String),

    /// A lookup or transfer named a key with no record behind it.
    #[error("the property {0} does not exist")]
    NotFound(String),

    /// Stored bytes under `key` failed to deserialize into a record.
    #[error("the record at {key} is malformed: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record failed to serialize ahead of a write.
    #[error("the property {id} could not be encoded: {source}")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The exchange-rate lookup failed, so a creation cannot be valued.
    #[error("exchange rate unavailable: {0}")]
    RateUnavailable(#[from] RateError),

    /// The oracle answered with a rate no property can be valued at.
    #[error("exchange rate {0} cannot value a property")]
    InvalidRate(f64),

    /// A guarded write found the record changed since it was read.
    #[error("the property {0} was modified concurrently")]
    WriteConflict(String),
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Whether retrying the same call unchanged has a chance of succeeding.
    /// Ledger faults and retryable oracle faults are transient; rejections
    /// like a duplicate id or a lost write race need the caller to re-read
    /// state first.
    pub fn is_transient(&self) -> bool {
        match self {
            RegistryError::Read(_) | RegistryError::Write(_) => true,
            RegistryError::RateUnavailable(e) => e.is_retryable(),
            _ => false,
        }
    }
}
