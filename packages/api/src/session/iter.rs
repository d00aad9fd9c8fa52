//! Iterator sugar over list-step queries
//!
//! Wraps the repeat-the-identical-path contract so callers can walk an
//! enumeration with ordinary iterator combinators.

use confq_client::{ConfigStore, QueryError, QueryResult};

use crate::session::core::Session;

/// Repeats one list query until the enumeration is exhausted
///
/// Yields `Ok(element)` per step. `EnumerationExhausted` ends the
/// iteration silently; any other failure is yielded once and then the
/// iterator fuses.
pub struct ListIter<'a, S: ConfigStore> {
    session: &'a mut Session<S>,
    path: String,
    done: bool,
}

impl<'a, S: ConfigStore> ListIter<'a, S> {
    pub(crate) fn new(session: &'a mut Session<S>, path: String) -> Self {
        Self {
            session,
            path,
            done: false,
        }
    }

    /// The path this iterator repeats
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<S: ConfigStore> Iterator for ListIter<'_, S> {
    type Item = QueryResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.session.get_list(&self.path) {
            Ok(element) => Some(Ok(element)),
            Err(QueryError::EnumerationExhausted) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
