//! # confq
//!
//! Path-expression queries over hierarchical configuration stores,
//! with resumable list enumeration across a stateless call surface.
//!
//! The engine lives in `confq_client`; this crate is the public facade:
//! a session builder, the scalar/list query calls, and iterator sugar
//! for walking an enumeration to exhaustion.
//!
//! ## Usage
//!
//! ```rust
//! use confq::{Confq, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let root = store.root_handle();
//! let cluster = store.add_child(root, "cluster").expect("fresh handle");
//! let nodes = store.add_child(cluster, "clusternodes").expect("fresh handle");
//! for name in ["n1", "n2", "n3"] {
//!     let node = store.add_child(nodes, "clusternode").expect("fresh handle");
//!     store.set_key(node, "name", name).expect("fresh handle");
//! }
//!
//! let mut session = Confq::new().connect(store);
//!
//! // scalar queries resolve fresh every time
//! let second = session
//!     .get("/cluster/clusternodes/clusternode[2]/@name")
//!     .expect("node exists");
//! assert_eq!(second, "n2");
//!
//! // list queries enumerate one element per call; the iterator sugar
//! // repeats the identical path until the enumeration is exhausted
//! let children: Result<Vec<_>, _> = session
//!     .iter_list("/cluster/clusternodes/child::*")
//!     .collect();
//! assert_eq!(children.expect("store intact").len(), 3);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod session;

// Re-export the engine types callers interact with
pub use confq_client::{
    ConfigStore, EngineConfig, MemoryStore, NodeHandle, QueryError, QueryMode, QueryResult,
    StatsSnapshot, StoreError,
};
pub use session::{ListIter, Session, SessionBuilder};

/// Builder convenience alias - the canonical entry point
pub type Confq = session::SessionBuilder;
