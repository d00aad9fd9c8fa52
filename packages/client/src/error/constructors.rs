//! Error constructor helpers
//!
//! Small functions that attach consistent context when building
//! [`QueryError`] values, so call sites stay one line.

use crate::engine::QueryMode;
use crate::error::QueryError;
use crate::path::PathSegment;

/// Path did not start with `/`
#[must_use]
pub fn not_absolute(path: &str) -> QueryError {
    QueryError::NotAbsolute {
        path: path.to_string(),
    }
}

/// Path longer than the configured maximum
#[must_use]
pub fn path_too_long(length: usize, limit: usize) -> QueryError {
    QueryError::PathTooLong { length, limit }
}

/// Empty component at the given byte offset
#[must_use]
pub fn empty_segment(offset: usize) -> QueryError {
    QueryError::EmptySegment { offset }
}

/// `[n]` selector with a non-positive or non-numeric index
#[must_use]
pub fn bad_index(segment: &str) -> QueryError {
    QueryError::BadIndex {
        segment: segment.to_string(),
    }
}

/// Structurally broken `[@attr="value"]` predicate
#[must_use]
pub fn malformed_predicate(segment: &str, reason: &'static str) -> QueryError {
    QueryError::MalformedPredicate {
        segment: segment.to_string(),
        reason,
    }
}

/// Terminal-only segment before the end of the path
#[must_use]
pub fn terminal_not_last(segment: &str) -> QueryError {
    QueryError::TerminalOnlySegmentNotLast {
        segment: segment.to_string(),
    }
}

/// Selector segment that matched no node
#[must_use]
pub fn not_found(segment: &PathSegment) -> QueryError {
    QueryError::NotFound {
        segment: segment.to_string(),
    }
}

/// Key absent on the selected node
#[must_use]
pub fn key_not_found(key: &str) -> QueryError {
    QueryError::KeyNotFound {
        key: key.to_string(),
    }
}

/// Terminal segment evaluated in the wrong query mode
#[must_use]
pub fn wrong_mode(segment: &PathSegment, required: QueryMode) -> QueryError {
    QueryError::WrongMode {
        segment: segment.to_string(),
        required,
    }
}

/// Path ending in a node selector, which has no result shape
#[must_use]
pub fn unsupported_terminal(segment: &PathSegment) -> QueryError {
    QueryError::UnsupportedTerminal {
        segment: segment.to_string(),
    }
}
