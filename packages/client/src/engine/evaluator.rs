//! Terminal segment evaluation
//!
//! Produces the query result once the resolver has pinned the base
//! node: a raw key value in scalar mode, or the next element of a
//! child/key enumeration in list mode. Enumerated children render as
//! `"name="`, key pairs as `"key=value"` — the wire shapes callers
//! parse.

use crate::engine::continuation::EnumerationCursor;
use crate::engine::QueryMode;
use crate::error::{
    key_not_found, not_found, unsupported_terminal, wrong_mode, QueryError, QueryResult,
};
use crate::path::PathSegment;
use crate::store::{ConfigStore, NodeHandle};

/// Outcome of one terminal evaluation
///
/// `cursor` is the enumeration cursor that exists after the call, when
/// there is one: on success the coordinator retains it for the next
/// identical list call; on failure it restores it so the in-flight
/// enumeration is left as it was.
pub struct EvalStep<S: ConfigStore> {
    /// Rendered result, or the failure to report
    pub result: QueryResult<String>,
    /// Cursor to retain (success) or restore (failure mid-enumeration)
    pub cursor: Option<EnumerationCursor<S>>,
}

impl<S: ConfigStore> EvalStep<S> {
    fn fail(error: QueryError) -> Self {
        Self {
            result: Err(error),
            cursor: None,
        }
    }
}

/// Evaluate the terminal `segment` against `node`
///
/// `resumed` carries the cursor of the in-flight enumeration when the
/// coordinator decided this call continues it; a cursor of the wrong
/// kind is dropped and a fresh one is opened.
pub fn evaluate_terminal<S: ConfigStore>(
    store: &mut S,
    node: NodeHandle,
    segment: &PathSegment,
    mode: QueryMode,
    resumed: Option<EnumerationCursor<S>>,
) -> EvalStep<S> {
    match segment {
        PathSegment::Key { name } => {
            if mode.is_list() {
                return EvalStep::fail(wrong_mode(segment, QueryMode::Scalar));
            }
            match store.key_get(node, name) {
                Ok(Some(value)) => EvalStep {
                    result: Ok(value),
                    cursor: None,
                },
                Ok(None) => EvalStep::fail(key_not_found(name)),
                Err(error) => EvalStep::fail(error.into()),
            }
        }

        PathSegment::AllKeys => {
            if !mode.is_list() {
                return EvalStep::fail(wrong_mode(segment, QueryMode::ListStep));
            }
            let mut cursor = match resumed {
                Some(EnumerationCursor::Keys(cursor)) => cursor,
                _ => match store.key_iter_start(node) {
                    Ok(cursor) => cursor,
                    Err(error) => return EvalStep::fail(error.into()),
                },
            };
            match store.key_iter_next(&mut cursor) {
                Ok(Some((key, value))) => EvalStep {
                    result: Ok(format!("{key}={value}")),
                    cursor: Some(EnumerationCursor::Keys(cursor)),
                },
                Ok(None) => EvalStep {
                    result: Err(QueryError::EnumerationExhausted),
                    cursor: Some(EnumerationCursor::Keys(cursor)),
                },
                Err(error) => EvalStep {
                    result: Err(error.into()),
                    cursor: Some(EnumerationCursor::Keys(cursor)),
                },
            }
        }

        PathSegment::AllChildren => {
            if !mode.is_list() {
                return EvalStep::fail(QueryError::BareFormRequiresList);
            }
            let mut cursor = match resumed {
                Some(EnumerationCursor::Children(cursor)) => cursor,
                _ => match store.child_iter_start(node) {
                    Ok(cursor) => cursor,
                    Err(error) => return EvalStep::fail(error.into()),
                },
            };
            match store.child_iter_next(&mut cursor) {
                Ok(Some((_, name))) => EvalStep {
                    result: Ok(format!("{name}=")),
                    cursor: Some(EnumerationCursor::Children(cursor)),
                },
                Ok(None) => EvalStep {
                    result: Err(QueryError::EnumerationExhausted),
                    cursor: Some(EnumerationCursor::Children(cursor)),
                },
                Err(error) => EvalStep {
                    result: Err(error.into()),
                    cursor: Some(EnumerationCursor::Children(cursor)),
                },
            }
        }

        PathSegment::AllChildrenIndexed { index } => {
            // never resumed: a fresh cursor every call, whatever the
            // mode or prior state; any passed cursor is dropped here
            drop(resumed);
            let mut cursor = match store.child_iter_start(node) {
                Ok(cursor) => cursor,
                Err(error) => return EvalStep::fail(error.into()),
            };
            let mut selected = None;
            for _ in 0..*index {
                match store.child_iter_next(&mut cursor) {
                    Ok(Some(entry)) => selected = Some(entry),
                    Ok(None) => return EvalStep::fail(not_found(segment)),
                    Err(error) => return EvalStep::fail(error.into()),
                }
            }
            match selected {
                Some((_, name)) => EvalStep {
                    result: Ok(format!("{name}=")),
                    cursor: mode
                        .is_list()
                        .then_some(EnumerationCursor::Children(cursor)),
                },
                None => EvalStep::fail(not_found(segment)),
            }
        }

        // a path ending in a node selector identifies a node, not a
        // value; there is nothing to extract
        PathSegment::Child { .. }
        | PathSegment::ChildIndexed { .. }
        | PathSegment::ChildFiltered { .. } => EvalStep::fail(unsupported_terminal(segment)),
    }
}
