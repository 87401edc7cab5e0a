#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use tokio::test;

    use crate::implementations::file_ledger::FileLedger;
    use crate::implementations::memory_ledger::MemoryLedger;
    use crate::traits::ledger_store::{ LedgerError, LedgerStore, WritePrecondition };

    // Setup function to initialize logging
    fn setup() {
        let _ = env_logger::try_init();
    }

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("cadastre-ledger-test-{}-{}", std::process::id(), name))
    }

    async fn seed(store: &impl LedgerStore, entries: &[(&str, &str)]) {
        for (key, value) in entries {
            store
                .put(key, value.as_bytes().to_vec(), WritePrecondition::None)
                .await
                .unwrap();
        }
    }

    #[test]
    async fn test_get_absent_key() {
        let store = MemoryLedger::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[test]
    async fn test_versions_count_writes() {
        setup();
        let store = MemoryLedger::new();

        store
            .put("K1", b"first".to_vec(), WritePrecondition::None)
            .await
            .unwrap();
        assert_eq!(store.get("K1").await.unwrap().unwrap().version, 1);

        store
            .put("K1", b"second".to_vec(), WritePrecondition::None)
            .await
            .unwrap();
        let entry = store.get("K1").await.unwrap().unwrap();
        assert_eq!(entry.version, 2);
        assert_eq!(entry.bytes, b"second");

        // A fresh key starts over at 1
        store
            .put("K2", b"other".to_vec(), WritePrecondition::None)
            .await
            .unwrap();
        assert_eq!(store.get("K2").await.unwrap().unwrap().version, 1);
    }

    #[test]
    async fn test_absent_key_precondition() {
        let store = MemoryLedger::new();

        store
            .put("K1", b"first".to_vec(), WritePrecondition::AbsentKey)
            .await
            .unwrap();

        let err = store
            .put("K1", b"usurper".to_vec(), WritePrecondition::AbsentKey)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::PreconditionFailed(ref key) if key == "K1"));

        // The rejected write left nothing behind
        let entry = store.get("K1").await.unwrap().unwrap();
        assert_eq!(entry.bytes, b"first");
        assert_eq!(entry.version, 1);
    }

    #[test]
    async fn test_match_version_precondition() {
        let store = MemoryLedger::new();
        seed(&store, &[("K1", "first")]).await;

        // Matching version commits and bumps
        store
            .put("K1", b"second".to_vec(), WritePrecondition::MatchVersion(1))
            .await
            .unwrap();
        assert_eq!(store.get("K1").await.unwrap().unwrap().version, 2);

        // The stale token now loses
        let err = store
            .put("K1", b"third".to_vec(), WritePrecondition::MatchVersion(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::PreconditionFailed(_)));

        // And a version check against a missing key loses too
        let err = store
            .put("K9", b"ghost".to_vec(), WritePrecondition::MatchVersion(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::PreconditionFailed(ref key) if key == "K9"));
    }

    #[test]
    async fn test_scan_is_lexicographic() {
        let store = MemoryLedger::new();
        seed(&store, &[("P3", "c"), ("P1", "a"), ("P10", "d"), ("P2", "b")]).await;

        let keys: Vec<String> = store
            .scan("", "")
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["P1", "P10", "P2", "P3"]);
    }

    #[test]
    async fn test_scan_bounds() {
        let store = MemoryLedger::new();
        seed(&store, &[("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")]).await;

        // Inclusive start, exclusive end
        let keys: Vec<String> = store
            .scan("B", "D")
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["B", "C"]);

        // Empty bound means unbounded on that side
        let keys: Vec<String> = store
            .scan("C", "")
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["C", "D"]);

        let keys: Vec<String> = store
            .scan("", "C")
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    async fn test_scan_empty_store() {
        let store = MemoryLedger::new();
        assert!(store.scan("", "").await.unwrap().is_empty());
    }

    #[test]
    async fn test_file_ledger_survives_reopen() {
        setup();
        let path = temp_path("reopen.json");
        fs::remove_file(&path).ok();

        {
            let store = FileLedger::open(&path).unwrap();
            seed(&store, &[("P1", "one"), ("P2", "two")]).await;
            store
                .put("P1", b"one-v2".to_vec(), WritePrecondition::MatchVersion(1))
                .await
                .unwrap();
        }

        // A new handle sees the same entries with versions intact
        let reopened = FileLedger::open(&path).unwrap();
        let entry = reopened.get("P1").await.unwrap().unwrap();
        assert_eq!(entry.bytes, b"one-v2");
        assert_eq!(entry.version, 2);
        assert_eq!(reopened.get("P2").await.unwrap().unwrap().version, 1);

        let keys: Vec<String> = reopened
            .scan("", "")
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["P1", "P2"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    async fn test_file_ledger_starts_empty_without_snapshot() {
        let path = temp_path("fresh.json");
        fs::remove_file(&path).ok();

        let store = FileLedger::open(&path).unwrap();
        assert!(store.scan("", "").await.unwrap().is_empty());
        // Nothing is written until the first put
        assert!(!path.exists());
    }

    #[test]
    async fn test_file_ledger_rejects_corrupt_snapshot() {
        setup();
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileLedger::open(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Backend(_)));
        assert!(err.to_string().contains("corrupt"));

        fs::remove_file(&path).ok();
    }

    #[test]
    async fn test_file_ledger_preconditions() {
        let path = temp_path("guards.json");
        fs::remove_file(&path).ok();

        let store = FileLedger::open(&path).unwrap();
        seed(&store, &[("P1", "one")]).await;

        let err = store
            .put("P1", b"dup".to_vec(), WritePrecondition::AbsentKey)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::PreconditionFailed(_)));

        let err = store
            .put("P1", b"stale".to_vec(), WritePrecondition::MatchVersion(7))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::PreconditionFailed(_)));

        // Failed writes never reached the snapshot
        let reopened = FileLedger::open(&path).unwrap();
        assert_eq!(reopened.get("P1").await.unwrap().unwrap().bytes, b"one");

        fs::remove_file(&path).ok();
    }
}
