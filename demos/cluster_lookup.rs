//! Walks a small cluster configuration tree: scalar lookups, indexed
//! and filtered selectors, and a resumable child enumeration.
//!
//! Run with `cargo run --example cluster_lookup`.

use confq::{Confq, MemoryStore, QueryError};

fn main() -> Result<(), QueryError> {
    env_logger::init();

    let store = MemoryStore::from_json(&serde_json::json!({
        "cluster": {
            "name": "alpha",
            "clusternodes": {
                "clusternode": [
                    { "name": "n1", "votes": 1 },
                    { "name": "n2", "votes": 1 },
                    { "name": "n3", "votes": 2 }
                ]
            }
        }
    }));

    let mut session = Confq::new().with_query_logging(true).connect(store);

    println!("cluster name: {}", session.get("/cluster/@name")?);
    println!(
        "second node:  {}",
        session.get("/cluster/clusternodes/clusternode[2]/@name")?
    );
    println!(
        "heavy node:   {}",
        session.get("/cluster/clusternodes/clusternode[@votes=\"2\"]/@name")?
    );

    for element in session.iter_list("/cluster/clusternodes/child::*") {
        println!("child: {}", element?);
    }

    let stats = session.stats_snapshot();
    println!(
        "{} queries, {} enumeration steps",
        stats.queries_executed, stats.list_steps
    );
    Ok(())
}
