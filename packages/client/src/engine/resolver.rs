//! Non-terminal segment resolution
//!
//! Each step advances from the current node to exactly one child. The
//! resolver never backtracks across segments: the first match per
//! segment wins, and a miss at any level fails the whole query.

use crate::error::{not_found, terminal_not_last, QueryResult};
use crate::path::PathSegment;
use crate::store::{ConfigStore, NodeHandle};

/// Advance from `current` through one non-terminal `segment`
///
/// Every variant opens a fresh search scope before touching the store,
/// so earlier queries cannot leak find positions into this one.
pub fn resolve_step<S: ConfigStore>(
    store: &mut S,
    current: NodeHandle,
    segment: &PathSegment,
) -> QueryResult<NodeHandle> {
    match segment {
        PathSegment::Child { name } => {
            store.find_start(current)?;
            match store.find_next(current, name)? {
                Some(child) => Ok(child),
                None => Err(not_found(segment)),
            }
        }

        PathSegment::ChildIndexed { name, index } => {
            store.find_start(current)?;
            let mut selected = None;
            for _ in 0..*index {
                match store.find_next(current, name)? {
                    Some(child) => selected = Some(child),
                    None => return Err(not_found(segment)),
                }
            }
            // index is always >= 1, so the loop ran at least once
            selected.ok_or_else(|| not_found(segment))
        }

        PathSegment::ChildFiltered { name, attr, value } => {
            store.find_start(current)?;
            while let Some(candidate) = store.find_next(current, name)? {
                // an absent key is a non-match, not an error
                if store.key_get(candidate, attr)?.as_deref() == Some(value.as_str()) {
                    return Ok(candidate);
                }
            }
            Err(not_found(segment))
        }

        // compile() only admits these in terminal position and the
        // coordinator never hands the terminal to the resolver
        PathSegment::AllChildren
        | PathSegment::AllChildrenIndexed { .. }
        | PathSegment::AllKeys
        | PathSegment::Key { .. } => Err(terminal_not_last(&segment.to_string())),
    }
}
