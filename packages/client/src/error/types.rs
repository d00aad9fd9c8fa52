//! Query error types
//!
//! One enum covers the whole call surface: parse-time rejections,
//! resolution and evaluation misses, caller contract misuse, the
//! expected end-of-enumeration signal, and store failures passed
//! through unmodified. Every error is returned as a value; the engine
//! never retries and never swallows a failure.

use thiserror::Error;

use crate::engine::QueryMode;
use crate::store::StoreError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors produced by path compilation and query execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Path did not start with `/`; relative paths are rejected
    #[error("path must be absolute and start with '/': {path:?}")]
    NotAbsolute {
        /// The offending input path
        path: String,
    },

    /// Path exceeded the configured maximum length; inputs are rejected,
    /// never truncated
    #[error("path length {length} exceeds the configured maximum of {limit} bytes")]
    PathTooLong {
        /// Byte length of the input
        length: usize,
        /// Configured maximum
        limit: usize,
    },

    /// A `/`-delimited component (or a key name after `@`) was empty
    #[error("empty path segment at byte offset {offset}")]
    EmptySegment {
        /// Byte offset of the empty component in the input
        offset: usize,
    },

    /// A `[n]` selector index was not a positive integer
    #[error("selector index must be a positive integer in {segment:?}")]
    BadIndex {
        /// The raw segment text
        segment: String,
    },

    /// A `[@attr="value"]` predicate was structurally broken
    #[error("malformed predicate in {segment:?}: {reason}")]
    MalformedPredicate {
        /// The raw segment text
        segment: String,
        /// What was missing or unbalanced
        reason: &'static str,
    },

    /// A terminal-only segment (`@key`, `@*`, `child::*`, `child::*[n]`)
    /// appeared before the end of the path
    #[error("{segment:?} is only valid as the final path segment")]
    TerminalOnlySegmentNotLast {
        /// The raw segment text
        segment: String,
    },

    /// No node matched a selector segment
    #[error("no node matched segment {segment:?}")]
    NotFound {
        /// Rendered form of the segment that missed
        segment: String,
    },

    /// The selected node does not carry the requested key
    #[error("key {key:?} not present on the selected node")]
    KeyNotFound {
        /// The requested key name
        key: String,
    },

    /// The terminal segment was used in the wrong query mode
    #[error("segment {segment:?} requires {required:?} mode")]
    WrongMode {
        /// Rendered form of the terminal segment
        segment: String,
        /// The mode the segment requires
        required: QueryMode,
    },

    /// Bare `child::*` enumerates children and therefore only makes
    /// sense as a list query
    #[error("bare 'child::*' enumerates children and is only valid in list mode")]
    BareFormRequiresList,

    /// The path ended in a node selector; a query must end in a key or
    /// enumeration segment to have a result shape
    #[error("path ends in node selector {segment:?}; queries must end in a key or enumeration segment")]
    UnsupportedTerminal {
        /// Rendered form of the terminal segment
        segment: String,
    },

    /// Expected end-of-sequence signal for list queries, not a fault
    #[error("enumeration exhausted")]
    EnumerationExhausted,

    /// Failure reported by the underlying store, passed through verbatim
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    /// True for the normal end-of-enumeration signal
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, QueryError::EnumerationExhausted)
    }

    /// True when the path itself was rejected before touching the store
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            QueryError::NotAbsolute { .. }
                | QueryError::PathTooLong { .. }
                | QueryError::EmptySegment { .. }
                | QueryError::BadIndex { .. }
                | QueryError::MalformedPredicate { .. }
                | QueryError::TerminalOnlySegmentNotLast { .. }
        )
    }

    /// True for resolution or evaluation misses (data-dependent, the
    /// caller may try another path)
    #[must_use]
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            QueryError::NotFound { .. } | QueryError::KeyNotFound { .. }
        )
    }
}
