#[cfg(test)]
mod tests {
    use confq::{Confq, MemoryStore, QueryError};

    fn cluster_store() -> MemoryStore {
        MemoryStore::from_json(&serde_json::json!({
            "cluster": {
                "name": "alpha",
                "clusternodes": {
                    "clusternode": [
                        { "name": "n1" },
                        { "name": "n2" },
                        { "name": "n3" }
                    ]
                }
            }
        }))
    }

    #[test]
    fn get_and_get_list_cover_both_modes() {
        let mut session = Confq::new().connect(cluster_store());

        assert_eq!(session.get("/cluster/@name").expect("key exists"), "alpha");
        assert_eq!(
            session
                .get("/cluster/clusternodes/clusternode[@name=\"n3\"]/@name")
                .expect("n3 exists"),
            "n3"
        );

        let path = "/cluster/clusternodes/child::*";
        for _ in 0..3 {
            assert_eq!(session.get_list(path).expect("child"), "clusternode=");
        }
        assert!(matches!(
            session.get_list(path),
            Err(QueryError::EnumerationExhausted)
        ));
    }

    #[test]
    fn iter_list_walks_to_exhaustion_and_fuses() {
        let mut session = Confq::new().connect(cluster_store());

        let mut iter = session.iter_list("/cluster/clusternodes/child::*");
        assert_eq!(iter.path(), "/cluster/clusternodes/child::*");
        let elements: Vec<_> = iter.by_ref().collect();
        assert_eq!(
            elements,
            vec![
                Ok("clusternode=".to_string()),
                Ok("clusternode=".to_string()),
                Ok("clusternode=".to_string()),
            ]
        );
        // fused after exhaustion
        assert!(iter.next().is_none());
    }

    #[test]
    fn iter_list_yields_a_failure_once_then_fuses() {
        let mut session = Confq::new().connect(cluster_store());

        let mut iter = session.iter_list("/cluster/missing/child::*");
        assert!(matches!(iter.next(), Some(Err(QueryError::NotFound { .. }))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn builder_config_reaches_the_engine() {
        let mut session = Confq::new()
            .with_max_path_length(8)
            .connect(cluster_store());
        assert!(matches!(
            session.get("/cluster/@name"),
            Err(QueryError::PathTooLong { limit: 8, .. })
        ));
    }

    #[test]
    fn disconnect_returns_the_store_for_reuse() {
        let mut session = Confq::new().connect(cluster_store());
        assert_eq!(
            session.get_list("/cluster/clusternodes/child::*").expect("child"),
            "clusternode="
        );
        assert!(!session.is_idle());

        let store = session.disconnect();

        // a new session starts with no continuation state
        let mut session = Confq::new().connect(store);
        assert!(session.is_idle());
        assert_eq!(
            session.get_list("/cluster/clusternodes/child::*").expect("child"),
            "clusternode="
        );
    }

    #[test]
    fn stats_snapshot_counts_session_activity() {
        let mut session = Confq::new().connect(cluster_store());
        session.get("/cluster/@name").expect("key exists");
        let _ = session.get("/cluster/@missing");
        session
            .get_list("/cluster/clusternodes/child::*")
            .expect("child");

        let stats = session.stats_snapshot();
        assert_eq!(stats.queries_executed, 3);
        assert_eq!(stats.scalar_results, 1);
        assert_eq!(stats.list_steps, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.enumerations_started, 1);
    }
}
