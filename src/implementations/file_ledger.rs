use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use log::{debug, info};

use crate::implementations::memory_ledger::range_bounds;
use crate::traits::ledger_store::{LedgerError, LedgerStore, VersionedValue, WritePrecondition};

/// World state persisted as a JSON snapshot on disk.
///
/// Every put rewrites the whole snapshot. The disk commit happens before
/// the in-memory map is updated, so a failed write leaves the visible
/// state unchanged. Ordering and precondition semantics are identical to
/// [`super::memory_ledger::MemoryLedger`].
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    state: Mutex<BTreeMap<String, VersionedValue>>,
}

impl FileLedger {
    /// Open the snapshot at `path`, or start empty when the file does not
    /// exist yet. A present but unreadable or corrupt snapshot is an error,
    /// never silently discarded state.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let state = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                LedgerError::Backend(format!("failed to read ledger snapshot: {}", e))
            })?;
            let state: BTreeMap<String, VersionedValue> = serde_json::from_str(&contents)
                .map_err(|e| {
                    LedgerError::Backend(format!("ledger snapshot is corrupt: {}", e))
                })?;
            info!(
                "Opened ledger snapshot {} with {} entries",
                path.display(),
                state.len()
            );
            state
        } else {
            debug!("No ledger snapshot at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn persist(&self, state: &BTreeMap<String, VersionedValue>) -> Result<(), LedgerError> {
        let contents = serde_json::to_string_pretty(state).map_err(|e| {
            LedgerError::Backend(format!("failed to encode ledger snapshot: {}", e))
        })?;
        fs::write(&self.path, contents).map_err(|e| {
            LedgerError::Backend(format!("failed to write ledger snapshot: {}", e))
        })
    }
}

#[async_trait]
impl LedgerStore for FileLedger {
    async fn get(&self, key: &str) -> Result<Option<VersionedValue>, LedgerError> {
        let state = self
            .state
            .lock()
            .map_err(|_| LedgerError::Backend("world state lock poisoned".to_string()))?;
        Ok(state.get(key).cloned())
    }

    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        precondition: WritePrecondition,
    ) -> Result<(), LedgerError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| LedgerError::Backend("world state lock poisoned".to_string()))?;

        precondition.check(state.get(key).map(|v| v.version), key)?;
        let version = state.get(key).map(|v| v.version + 1).unwrap_or(1);

        let mut next = state.clone();
        next.insert(key.to_string(), VersionedValue { bytes, version });
        self.persist(&next)?;
        *state = next;
        Ok(())
    }

    async fn scan(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<(String, VersionedValue)>, LedgerError> {
        let state = self
            .state
            .lock()
            .map_err(|_| LedgerError::Backend("world state lock poisoned".to_string()))?;

        Ok(state
            .range(range_bounds(start_key, end_key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
