use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::ledger_store::{LedgerError, LedgerStore, VersionedValue, WritePrecondition};

/// World state held in memory: a sorted map of key to versioned bytes.
///
/// Scan order is lexicographic by key. Backs tests and ephemeral runs;
/// durable deployments use a persistent [`LedgerStore`] binding instead.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: Mutex<BTreeMap<String, VersionedValue>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn range_bounds(start_key: &str, end_key: &str) -> (Bound<String>, Bound<String>) {
    let lower = if start_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start_key.to_string())
    };
    let upper = if end_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end_key.to_string())
    };
    (lower, upper)
}

#[async_trait]
impl LedgerStore for MemoryLedger {
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
        state.insert(key.to_string(), VersionedValue { bytes, version });
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
