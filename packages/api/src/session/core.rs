//! Core session structures and the scalar/list query calls
//!
//! Contains the [`SessionBuilder`] fluent entry point and the
//! [`Session`] handle that wraps one engine bound to one store.

use confq_client::{ConfigStore, EngineConfig, QueryEngine, QueryResult, StatsSnapshot};

use crate::session::iter::ListIter;

/// Fluent entry point for opening query sessions
///
/// ```rust
/// use confq::{Confq, MemoryStore};
///
/// let mut session = Confq::new()
///     .with_max_path_length(512)
///     .connect(MemoryStore::new());
/// assert!(session.get("/missing/@key").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config: EngineConfig,
}

impl SessionBuilder {
    /// Start building a session with default engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Replace the engine configuration wholesale
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the accepted path length
    #[must_use]
    pub fn with_max_path_length(mut self, limit: usize) -> Self {
        self.config = self.config.with_max_path_length(limit);
        self
    }

    /// Log every query with its resume/fresh decision
    #[must_use]
    pub fn with_query_logging(mut self, enabled: bool) -> Self {
        self.config = self.config.with_query_logging(enabled);
        self
    }

    /// Open a session over `store`
    pub fn connect<S: ConfigStore>(self, store: S) -> Session<S> {
        log::debug!("opening query session");
        Session {
            engine: QueryEngine::with_config(store, self.config),
        }
    }
}

/// An open query session bound to one store
///
/// Holds the engine's continuation record, so at most one list
/// enumeration is in flight per session; issuing any other query
/// discards it.
pub struct Session<S: ConfigStore> {
    pub(crate) engine: QueryEngine<S>,
}

impl<S: ConfigStore> Session<S> {
    /// Scalar query for exactly one value
    pub fn get(&mut self, path: &str) -> QueryResult<String> {
        self.engine.query(path)
    }

    /// Advance the enumeration for `path` by one element
    ///
    /// Repeat the identical path string, character for character, until
    /// `EnumerationExhausted`. Prefer [`Session::iter_list`] unless the
    /// call sites are naturally spread out.
    pub fn get_list(&mut self, path: &str) -> QueryResult<String> {
        self.engine.query_next(path)
    }

    /// Iterate a list query to exhaustion
    pub fn iter_list(&mut self, path: impl Into<String>) -> ListIter<'_, S> {
        ListIter::new(self, path.into())
    }

    /// True when no enumeration is in flight
    pub fn is_idle(&self) -> bool {
        self.engine.is_idle()
    }

    /// Point-in-time engine statistics
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.engine.stats().snapshot()
    }

    /// Close the session and hand the store back, discarding any
    /// in-flight enumeration
    pub fn disconnect(self) -> S {
        log::debug!("closing query session");
        self.engine.into_store()
    }
}
