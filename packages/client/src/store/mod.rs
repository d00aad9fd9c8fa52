//! Store collaborator interface
//!
//! The engine never owns configuration data; it walks an external,
//! session-oriented object/key tree through the narrow cursor-based
//! primitives defined here. [`MemoryStore`] is the bundled in-process
//! implementation.

pub mod memory;
pub mod traits;

pub use memory::{MemoryChildCursor, MemoryKeyCursor, MemoryStore};
pub use traits::{ConfigStore, NodeHandle, StoreError, StoreResult};
