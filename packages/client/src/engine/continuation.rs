//! Cross-call enumeration state
//!
//! List queries are resumable across a stateless call surface: the
//! caller signals "next element" by repeating the exact same path
//! string. The record here is the engine's entire memory between
//! calls. It holds at most one live enumeration; replacing or clearing
//! it drops the embedded cursor, which releases any store-side
//! iterator state.

use crate::store::{ConfigStore, NodeHandle};

/// Cursor of the in-flight enumeration
pub enum EnumerationCursor<S: ConfigStore> {
    /// Child iteration opened by `child::*` or `child::*[n]`
    Children(S::ChildCursor),
    /// Key iteration opened by `@*`
    Keys(S::KeyCursor),
}

/// One live enumeration: the query string that owns it, the node it
/// enumerates, and the store cursor to advance on the next identical
/// call
pub struct ActiveEnumeration<S: ConfigStore> {
    /// Exact query string; continuation requires byte-for-byte equality
    pub query: String,
    /// Node the terminal segment enumerates
    pub base: NodeHandle,
    /// Store cursor positioned after the last returned element
    pub cursor: EnumerationCursor<S>,
}

/// Session-scoped continuation record, empty or holding exactly one
/// live enumeration
pub struct ContinuationState<S: ConfigStore> {
    active: Option<ActiveEnumeration<S>>,
}

impl<S: ConfigStore> ContinuationState<S> {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    /// True when `path` continues the enumeration recorded here
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.query == path)
    }

    /// Take the active enumeration, leaving the record empty
    pub fn take(&mut self) -> Option<ActiveEnumeration<S>> {
        self.active.take()
    }

    /// Drop any active enumeration, releasing its cursor
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Record a live enumeration, replacing any previous one
    pub fn install(&mut self, query: String, base: NodeHandle, cursor: EnumerationCursor<S>) {
        self.active = Some(ActiveEnumeration {
            query,
            base,
            cursor,
        });
    }

    /// True when no enumeration is in flight
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }
}

impl<S: ConfigStore> Default for ContinuationState<S> {
    fn default() -> Self {
        Self::new()
    }
}
