#[cfg(test)]
mod tests {
    use tokio::test;

    use crate::errors::RegistryError;
    use crate::implementations::contract::{ ContractError, ContractResponse, ContractRouter };
    use crate::implementations::memory_ledger::MemoryLedger;
    use crate::implementations::rate_oracle::FixedRateSource;
    use crate::implementations::registry::PropertyRegistry;

    // Setup function to initialize logging
    fn setup() {
        let _ = env_logger::try_init();
    }

    fn test_router(rate: f64) -> ContractRouter<PropertyRegistry<MemoryLedger, FixedRateSource>> {
        setup();
        ContractRouter::new(PropertyRegistry::new(
            MemoryLedger::new(),
            FixedRateSource::new(rate),
        ))
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    async fn test_invoke_add_and_query() {
        let router = test_router(50_000.0);

        let response = router
            .invoke("AddProperty", &args(&["P1", "Hilltop Cottage", "420", "Alice", "100000"]))
            .await
            .unwrap();
        assert_eq!(response, ContractResponse::Empty);

        let response = router
            .invoke("QueryPropertyByID", &args(&["P1"]))
            .await
            .unwrap();
        match response {
            ContractResponse::One(property) => {
                assert_eq!(property.id, "P1");
                assert_eq!(property.name, "Hilltop Cottage");
                assert_eq!(property.area, 420);
                assert_eq!(property.owner_name, "Alice");
                assert_eq!(property.value, 100_000);
                assert_eq!(property.bitcoin_value, 2.0);
            }
            other => panic!("expected a single record, got {:?}", other),
        }
    }

    #[test]
    async fn test_invoke_query_all() {
        let router = test_router(50_000.0);

        router
            .invoke("AddProperty", &args(&["P2", "Barn", "80", "Bob", "20000"]))
            .await
            .unwrap();
        router
            .invoke("AddProperty", &args(&["P1", "Cottage", "40", "Alice", "10000"]))
            .await
            .unwrap();

        let response = router.invoke("QueryAllProperties", &[]).await.unwrap();
        match response {
            ContractResponse::Many(properties) => {
                let ids: Vec<&str> = properties.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, vec!["P1", "P2"]);
            }
            other => panic!("expected a record list, got {:?}", other),
        }
    }

    #[test]
    async fn test_invoke_transfer() {
        let router = test_router(50_000.0);

        router
            .invoke("AddProperty", &args(&["P1", "Cottage", "40", "Alice", "10000"]))
            .await
            .unwrap();
        let response = router
            .invoke("TransferProperty", &args(&["P1", "Bob"]))
            .await
            .unwrap();
        assert_eq!(response, ContractResponse::Empty);

        let response = router
            .invoke("QueryPropertyByID", &args(&["P1"]))
            .await
            .unwrap();
        match response {
            ContractResponse::One(property) => assert_eq!(property.owner_name, "Bob"),
            other => panic!("expected a single record, got {:?}", other),
        }
    }

    #[test]
    async fn test_unknown_function() {
        let router = test_router(50_000.0);

        let err = router.invoke("DeleteProperty", &[]).await.unwrap_err();
        assert!(matches!(err, ContractError::UnknownFunction(ref name) if name == "DeleteProperty"));
    }

    #[test]
    async fn test_arity_is_checked() {
        let router = test_router(50_000.0);

        let err = router
            .invoke("AddProperty", &args(&["P1", "Cottage"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ContractError::BadArity { function: "AddProperty", expected: 5, got: 2 }
        ));

        let err = router
            .invoke("QueryAllProperties", &args(&["stray"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::BadArity { expected: 0, got: 1, .. }));

        let err = router
            .invoke("TransferProperty", &args(&["P1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::BadArity { expected: 2, got: 1, .. }));
    }

    #[test]
    async fn test_non_integer_arguments_rejected() {
        let router = test_router(50_000.0);

        let err = router
            .invoke("AddProperty", &args(&["P1", "Cottage", "forty", "Alice", "10000"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ContractError::InvalidArgument { name: "area", ref value, .. } if value == "forty"
        ));

        let err = router
            .invoke("AddProperty", &args(&["P1", "Cottage", "40", "Alice", "1e4"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { name: "value", .. }));

        // Nothing was created along the way
        let response = router.invoke("QueryAllProperties", &[]).await.unwrap();
        assert_eq!(response, ContractResponse::Many(vec![]));
    }

    #[test]
    async fn test_integer_arguments_accept_whitespace() {
        let router = test_router(50_000.0);

        router
            .invoke("AddProperty", &args(&["P1", "Cottage", " 40 ", "Alice", " 10000"]))
            .await
            .unwrap();

        let response = router
            .invoke("QueryPropertyByID", &args(&["P1"]))
            .await
            .unwrap();
        match response {
            ContractResponse::One(property) => {
                assert_eq!(property.area, 40);
                assert_eq!(property.value, 10_000);
            }
            other => panic!("expected a single record, got {:?}", other),
        }
    }

    #[test]
    async fn test_registry_errors_pass_through() {
        let router = test_router(50_000.0);

        let err = router
            .invoke("QueryPropertyByID", &args(&["P404"]))
            .await
            .unwrap_err();
        match err {
            ContractError::Registry(inner) => {
                assert!(matches!(inner, RegistryError::NotFound(_)));
                // The registry's reason string survives the boundary verbatim
                assert_eq!(inner.to_string(), "the property P404 does not exist");
            }
            other => panic!("expected a registry error, got {:?}", other),
        }

        router
            .invoke("AddProperty", &args(&["P1", "Cottage", "40", "Alice", "10000"]))
            .await
            .unwrap();
        let err = router
            .invoke("AddProperty", &args(&["P1", "Again", "1", "Bob", "1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::Registry(RegistryError::DuplicateId(_))));
    }

    #[test]
    async fn test_response_json_rendering() {
        let router = test_router(50_000.0);

        router
            .invoke("AddProperty", &args(&["P1", "Cottage", "40", "Alice", "25000"]))
            .await
            .unwrap();

        let response = router
            .invoke("QueryPropertyByID", &args(&["P1"]))
            .await
            .unwrap();
        let payload = serde_json::to_value(&response).unwrap();
        assert_eq!(payload["id"], "P1");
        assert_eq!(payload["ownerName"], "Alice");
        assert_eq!(payload["BitcoinValue"], 0.5);

        let response = router.invoke("QueryAllProperties", &[]).await.unwrap();
        let payload = serde_json::to_value(&response).unwrap();
        assert!(payload.is_array());
        assert_eq!(payload.as_array().unwrap().len(), 1);

        let empty = serde_json::to_value(&ContractResponse::Empty).unwrap();
        assert!(empty.is_null());
    }
}
