//! # confq client engine
//!
//! Query engine that resolves a restricted path-expression language
//! against a hierarchical, session-oriented configuration store and
//! returns scalar values or enumerated `name=value` pairs.
//!
//! The store itself is an external collaborator reached only through
//! the narrow cursor-based primitives of [`store::ConfigStore`]
//! (find-by-name, iterate-children, get-key, iterate-keys);
//! [`store::MemoryStore`] is the bundled in-process implementation used
//! by tests, demos and embedders.
//!
//! ## Path language
//!
//! ```text
//! /cluster/@name                                    value of one key
//! /cluster/clusternodes/clusternode[2]/@name        2nd matching child (1-based)
//! /cluster/clusternodes/clusternode[@name="n3"]/@x  first child whose key matches
//! /cluster/clusternodes/child::*                    enumerate children (list mode)
//! /cluster/clusternodes/child::*[2]                 2nd child by position
//! /cluster/cman/@*                                  enumerate keys (list mode)
//! ```
//!
//! ## Resumable list queries
//!
//! The public call surface is stateless request/response, but the
//! store's iteration primitives are session-bound cursors. A list call
//! that repeats the previous list query **byte-for-byte** advances the
//! same enumeration; any other query discards the in-flight cursor.
//! [`engine::QueryEngine`] keeps that single continuation record and
//! makes the comparison explicit. The engine performs no concurrency of
//! its own and is meant for strictly sequential, single-caller use.

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod engine;
pub mod error;
pub mod path;
pub mod stats;
pub mod store;

// Essential public API
pub use crate::config::EngineConfig;
pub use crate::engine::{QueryEngine, QueryMode};
pub use crate::error::{QueryError, QueryResult};
pub use crate::path::{PathCompiler, PathExpression, PathSegment};
pub use crate::stats::{EngineStats, StatsSnapshot};
pub use crate::store::{ConfigStore, MemoryStore, NodeHandle, StoreError, StoreResult};
