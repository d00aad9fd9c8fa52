//! Path expression segment definitions
//!
//! Core type definitions for representing compiled path expressions as
//! structured data, independent of the raw input buffer.

use std::fmt;

/// One `/`-delimited component of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// First child with a matching name (`node`)
    Child {
        /// Name of the child to select
        name: String,
    },

    /// The n-th child with a matching name, 1-based (`node[2]`)
    ChildIndexed {
        /// Name of the children to count through
        name: String,
        /// 1-based position among matching children, always > 0
        index: u32,
    },

    /// First child with a matching name whose key equals a value
    /// (`node[@id="x"]`); comparison is exact and case-sensitive
    ChildFiltered {
        /// Name of the candidate children
        name: String,
        /// Key to fetch on each candidate
        attr: String,
        /// Required key value
        value: String,
    },

    /// Enumerate every child of the current node (`child::*`);
    /// terminal only, list mode only
    AllChildren,

    /// The n-th child regardless of name, 1-based (`child::*[2]`);
    /// terminal only
    AllChildrenIndexed {
        /// 1-based position among all children, always > 0
        index: u32,
    },

    /// Enumerate every key/value pair of the current node (`@*`);
    /// terminal only, list mode only
    AllKeys,

    /// The value of a single key on the current node (`@name`);
    /// terminal only, scalar mode only
    Key {
        /// Key to fetch
        name: String,
    },
}

impl PathSegment {
    /// Whether this segment may only appear as the last path component
    #[inline]
    #[must_use]
    pub fn is_terminal_only(&self) -> bool {
        matches!(
            self,
            PathSegment::AllChildren
                | PathSegment::AllChildrenIndexed { .. }
                | PathSegment::AllKeys
                | PathSegment::Key { .. }
        )
    }

    /// Whether this segment enumerates elements rather than selecting
    /// exactly one
    #[inline]
    #[must_use]
    pub fn is_enumeration(&self) -> bool {
        matches!(self, PathSegment::AllChildren | PathSegment::AllKeys)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Child { name } => write!(f, "{name}"),
            PathSegment::ChildIndexed { name, index } => write!(f, "{name}[{index}]"),
            PathSegment::ChildFiltered { name, attr, value } => {
                write!(f, "{name}[@{attr}=\"{value}\"]")
            }
            PathSegment::AllChildren => write!(f, "child::*"),
            PathSegment::AllChildrenIndexed { index } => write!(f, "child::*[{index}]"),
            PathSegment::AllKeys => write!(f, "@*"),
            PathSegment::Key { name } => write!(f, "@{name}"),
        }
    }
}

/// Compiled absolute path expression
///
/// Structurally non-empty: the interior selector segments and the
/// terminal segment are stored separately, matching how the engine
/// consumes them (resolve the interior, evaluate the terminal). The
/// original input string is retained because list-query continuation is
/// keyed on byte-for-byte path equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    interior: Vec<PathSegment>,
    terminal: PathSegment,
    original: String,
}

impl PathExpression {
    /// Create a new expression; only the compiler builds these
    pub(crate) fn new(interior: Vec<PathSegment>, terminal: PathSegment, original: String) -> Self {
        Self {
            interior,
            terminal,
            original,
        }
    }

    /// The non-terminal selector segments, in path order
    #[inline]
    #[must_use]
    pub fn interior(&self) -> &[PathSegment] {
        &self.interior
    }

    /// The terminal segment that shapes the query result
    #[inline]
    #[must_use]
    pub fn terminal(&self) -> &PathSegment {
        &self.terminal
    }

    /// The original path string this expression was compiled from
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Total number of segments, terminal included
    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.interior.len() + 1
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
