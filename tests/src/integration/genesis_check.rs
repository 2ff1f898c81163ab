//! # Genesis Check Flows
//!
//! Runs the full `check-genesis` pipeline against a registry directory on
//! disk, the way the `qc-ops` binary wires it:
//!
//! 1. **Read**: local file missing → Read
//! 2. **Decode**: malformed or off-schema JSON → Parse
//! 3. **Lookup**: chain not in the registry → Lookup
//! 4. **Compare**: any field divergence → Mismatch with a field-level diff

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use alloy_primitives::U256;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use qc_ops::{
        CheckError, ErrorKind, GenesisCheckApi, GenesisChecker, JsonTreeComparator, OpsConfig,
        ProviderError, RegistryGenesisProvider,
    };

    use crate::{SEPOLIA_ROLLUP_CHAIN_ID, SEPOLIA_ROLLUP_GENESIS};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Temp workspace with a registry holding the fixture genesis.
    struct Workspace {
        dir: TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::create_dir_all(dir.path().join("registry")).unwrap();
            fs::write(
                dir.path()
                    .join("registry")
                    .join(format!("{SEPOLIA_ROLLUP_CHAIN_ID}.json")),
                SEPOLIA_ROLLUP_GENESIS,
            )
            .unwrap();
            Self { dir }
        }

        fn registry(&self) -> PathBuf {
            self.dir.path().join("registry")
        }

        fn write_local(&self, contents: &str) -> PathBuf {
            let path = self.dir.path().join("genesis.json");
            fs::write(&path, contents).unwrap();
            path
        }

        fn write_local_json(&self, doc: &Value) -> PathBuf {
            self.write_local(&serde_json::to_string_pretty(doc).unwrap())
        }

        fn checker(&self) -> GenesisChecker<RegistryGenesisProvider, JsonTreeComparator> {
            let config = OpsConfig::for_testing(self.registry());
            GenesisChecker::new(
                RegistryGenesisProvider::from_config(&config),
                JsonTreeComparator::new(),
            )
        }

        fn check(&self, path: &Path) -> Result<u64, CheckError> {
            self.checker().check_file(path).map(|report| report.chain_id)
        }
    }

    fn fixture() -> Value {
        serde_json::from_str(SEPOLIA_ROLLUP_GENESIS).unwrap()
    }

    // =============================================================================
    // SUCCESS PATH
    // =============================================================================

    #[test]
    fn test_identical_copy_passes() {
        let ws = Workspace::new();
        let local = ws.write_local(SEPOLIA_ROLLUP_GENESIS);

        assert_eq!(ws.check(&local).unwrap(), SEPOLIA_ROLLUP_CHAIN_ID);
    }

    #[test]
    fn test_reformatted_copy_passes() {
        // Same values, different key order, whitespace and encodings.
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["gasLimit"] = json!(30_000_000u64);
        doc["timestamp"] = json!("0x0064d6dbac");
        let create2 = doc["alloc"]
            .as_object_mut()
            .unwrap()
            .remove("0x4e59b44847b379578588920ca78fbf26c0b4956c")
            .unwrap();
        doc["alloc"]["0x4E59B44847B379578588920CA78FBF26C0B4956C"] = create2;
        doc["alloc"]["0xfd1d2e729ae8eee2e146c033bf4400fe75284301"]["balance"] =
            json!((U256::from(1) << 249usize).to_string());
        doc["mixHash"] = Value::Null;
        let local = ws.write_local_json(&doc);

        assert_eq!(ws.check(&local).unwrap(), SEPOLIA_ROLLUP_CHAIN_ID);
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[test]
    fn test_missing_local_file() {
        let ws = Workspace::new();
        let err = ws.check(&ws.dir.path().join("absent.json")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_local_file() {
        let ws = Workspace::new();
        let local = ws.write_local("{\"config\": {\"chainId\": 11155420}");

        let err = ws.check(&local).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_invalid_quantity_is_parse_error() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["gasLimit"] = json!("0xnot-hex");
        let local = ws.write_local_json(&doc);

        let err = ws.check(&local).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_unregistered_chain() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["config"]["chainId"] = json!(424242);
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(CheckError::Lookup { chain_id, source }) => {
                assert_eq!(chain_id, 424242);
                assert!(matches!(source, ProviderError::NotRegistered(424242)));
            }
            other => panic!("expected Lookup error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_balance_divergence() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["alloc"]["0xfd1d2e729ae8eee2e146c033bf4400fe75284301"]["balance"] = json!("0x1");
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(CheckError::Mismatch(report)) => {
                assert_eq!(
                    report.paths(),
                    vec!["alloc.0xfd1d2e729ae8eee2e146c033bf4400fe75284301.balance"]
                );
                let diff = &report.differences()[0];
                assert_eq!(diff.local, Some(json!("0x1")));
                assert_eq!(
                    diff.canonical,
                    Some(json!(format!("0x2{}", "0".repeat(62))))
                );
            }
            other => panic!("expected Mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_account_reported_as_added() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["alloc"]
            .as_object_mut()
            .unwrap()
            .remove("0x4200000000000000000000000000000000000016");
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(CheckError::Mismatch(report)) => {
                assert_eq!(report.len(), 1);
                let diff = &report.differences()[0];
                assert_eq!(diff.path, "alloc.0x4200000000000000000000000000000000000016");
                assert!(diff.local.is_none());
                assert!(diff.canonical.is_some());
            }
            other => panic!("expected Mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_fork_schedule_divergence() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["config"]["graniteTime"] = json!(1_723_478_401u64);
        doc["config"]
            .as_object_mut()
            .unwrap()
            .remove("fjordTime");
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(err @ CheckError::Mismatch(_)) => {
                let text = err.to_string();
                assert!(text.starts_with("local genesis (-) does not match canonical genesis (+)"));
                assert!(text.contains("config.fjordTime"));
                assert!(text.contains("config.graniteTime"));
                if let CheckError::Mismatch(report) = err {
                    assert_eq!(report.paths(), vec!["config.fjordTime", "config.graniteTime"]);
                }
            }
            other => panic!("expected Mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_fork_activation_is_mismatch() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["config"]["isthmusTime"] = json!(1_746_806_401u64);
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(CheckError::Mismatch(report)) => {
                assert_eq!(report.paths(), vec!["config.isthmusTime"]);
                let diff = &report.differences()[0];
                assert_eq!(diff.local, Some(json!(1_746_806_401u64)));
                assert!(diff.canonical.is_none());
            }
            other => panic!("expected Mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_rollup_parameter_divergence() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["config"]["optimism"]["eip1559DenominatorCanyon"] = json!(50);
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(CheckError::Mismatch(report)) => {
                assert_eq!(
                    report.paths(),
                    vec!["config.optimism.eip1559DenominatorCanyon"]
                );
            }
            other => panic!("expected Mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_entry_for_wrong_chain() {
        let ws = Workspace::new();
        let mut doc = fixture();
        doc["config"]["chainId"] = json!(10);
        fs::write(
            ws.registry().join("10.json"),
            serde_json::to_string(&fixture()).unwrap(),
        )
        .unwrap();
        let local = ws.write_local_json(&doc);

        match ws.check(&local) {
            Err(CheckError::Lookup { source, .. }) => {
                assert!(matches!(source, ProviderError::ChainIdMismatch { requested: 10, .. }));
            }
            other => panic!("expected Lookup error, got {:?}", other),
        }
    }
}
