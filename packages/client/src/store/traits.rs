//! Cursor-based store primitives
//!
//! The contract mirrors how session-oriented configuration databases
//! expose their trees: name searches are stateful scopes bound to a
//! parent node, and child/key iteration happens through explicit
//! cursors. The engine is generic over this trait and drives it
//! strictly sequentially.

use thiserror::Error;

/// Opaque reference to one object in the store's tree
///
/// Handles are only valid within the session that produced them;
/// nothing about the tree can be derived from the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(u64);

impl NodeHandle {
    /// Wrap a raw store-assigned identifier
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw store-assigned identifier
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Failures reported by the underlying store
///
/// These pass through the engine unmodified; the engine never retries
/// a store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The session to the store was lost
    #[error("store connection lost")]
    ConnectionLost,

    /// A node handle did not refer to a live object in this session
    #[error("stale or foreign node handle {0:?}")]
    InvalidHandle(NodeHandle),

    /// Any other backend failure, reported verbatim
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for store primitives
pub type StoreResult<T> = Result<T, StoreError>;

/// Session-oriented hierarchical store, one object tree with named
/// keys per object
///
/// Find scopes are stateful per parent node: [`find_start`] resets the
/// scope under a node and successive [`find_next`] calls with the same
/// node advance through matching children. Iteration cursors are plain
/// values owned by the caller; dropping a cursor abandons the
/// iteration, so a store that keeps server-side iterator state should
/// release it from the cursor's `Drop` impl.
///
/// [`find_start`]: ConfigStore::find_start
/// [`find_next`]: ConfigStore::find_next
pub trait ConfigStore {
    /// Cursor over the children of one node
    type ChildCursor;
    /// Cursor over the key/value pairs of one node
    type KeyCursor;

    /// Handle of the tree root
    fn root(&self) -> NodeHandle;

    /// Reset the name-search scope under `node`
    fn find_start(&mut self, node: NodeHandle) -> StoreResult<()>;

    /// Next child of `node` named `name` within the current search
    /// scope; `None` when no further child matches
    fn find_next(&mut self, node: NodeHandle, name: &str) -> StoreResult<Option<NodeHandle>>;

    /// Open a cursor over all children of `node`, in store order
    fn child_iter_start(&mut self, node: NodeHandle) -> StoreResult<Self::ChildCursor>;

    /// Advance a child cursor; `None` when exhausted
    fn child_iter_next(
        &mut self,
        cursor: &mut Self::ChildCursor,
    ) -> StoreResult<Option<(NodeHandle, String)>>;

    /// Value of `key` on `node`; `None` when the key is absent
    /// (absence is data, not an error)
    fn key_get(&mut self, node: NodeHandle, key: &str) -> StoreResult<Option<String>>;

    /// Open a cursor over all key/value pairs of `node`
    fn key_iter_start(&mut self, node: NodeHandle) -> StoreResult<Self::KeyCursor>;

    /// Advance a key cursor; `None` when exhausted
    fn key_iter_next(
        &mut self,
        cursor: &mut Self::KeyCursor,
    ) -> StoreResult<Option<(String, String)>>;
}
