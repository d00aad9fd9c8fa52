//! Query coordination across calls
//!
//! [`QueryEngine`] owns the store session, the continuation record and
//! the statistics block, and drives compile → resolve → evaluate for
//! every call. A list call that repeats the previous list query
//! byte-for-byte resumes its enumeration instead of walking the tree
//! again; every other call discards whatever enumeration was in
//! flight. Any failure leaves the engine idle and ready for the next
//! independent query.

use log::{debug, warn};

use crate::config::EngineConfig;
use crate::engine::continuation::ContinuationState;
use crate::engine::evaluator::evaluate_terminal;
use crate::engine::resolver::resolve_step;
use crate::engine::QueryMode;
use crate::error::{QueryError, QueryResult};
use crate::path::{PathCompiler, PathExpression};
use crate::stats::EngineStats;
use crate::store::{ConfigStore, NodeHandle};

/// Path-expression query engine bound to one store session
///
/// The engine performs no concurrency of its own; it is designed for
/// strictly sequential, single-caller use, and at most one enumeration
/// is live at any time.
pub struct QueryEngine<S: ConfigStore> {
    store: S,
    config: EngineConfig,
    continuation: ContinuationState<S>,
    stats: EngineStats,
}

impl<S: ConfigStore> QueryEngine<S> {
    /// Bind a new engine to `store` with default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Bind a new engine to `store` with explicit configuration
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            continuation: ContinuationState::new(),
            stats: EngineStats::new(),
        }
    }

    /// Scalar query: resolve fresh and return exactly one value
    ///
    /// Always discards any in-flight enumeration, even when the path
    /// fails to resolve.
    pub fn query(&mut self, path: &str) -> QueryResult<String> {
        self.run(path, QueryMode::Scalar)
    }

    /// List-step query: return the next element of the enumeration for
    /// `path`
    ///
    /// Repeat the identical path string, character for character, to
    /// advance through one enumeration until `EnumerationExhausted`.
    /// Issuing any other query in between invalidates the enumeration.
    pub fn query_next(&mut self, path: &str) -> QueryResult<String> {
        self.run(path, QueryMode::ListStep)
    }

    /// Engine statistics
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True when no enumeration is in flight
    pub fn is_idle(&self) -> bool {
        self.continuation.is_idle()
    }

    /// End the session and hand the store back, discarding any
    /// in-flight enumeration
    pub fn into_store(self) -> S {
        self.store
    }

    fn run(&mut self, path: &str, mode: QueryMode) -> QueryResult<String> {
        let _span = tracing::debug_span!("query", mode = ?mode).entered();
        self.stats.record_query();

        let result = self.run_inner(path, mode);
        match &result {
            Ok(_) => match mode {
                QueryMode::Scalar => self.stats.record_scalar(),
                QueryMode::ListStep => self.stats.record_list_step(),
            },
            Err(error) => {
                if error.is_miss() {
                    self.stats.record_miss();
                } else if let QueryError::Store(store_error) = error {
                    self.stats.record_store_error();
                    warn!("store failure during query {path:?}: {store_error}");
                }
            }
        }
        result
    }

    fn run_inner(&mut self, path: &str, mode: QueryMode) -> QueryResult<String> {
        let resuming = mode.is_list() && self.continuation.matches(path);
        if !resuming {
            // any other call invalidates the in-flight enumeration;
            // dropping the record releases its cursor
            self.continuation.clear();
        }

        // compilation is pure and the terminal segment is needed either
        // way; an identical string compiles to an identical expression,
        // so resuming skips only the resolver walk
        let expression = match PathCompiler::compile(path, &self.config) {
            Ok(expression) => expression,
            Err(error) => {
                self.stats.record_compile_error();
                return Err(error);
            }
        };

        let (base, resumed) = match self.continuation.take() {
            Some(active) if resuming => {
                if self.config.log_queries {
                    debug!("resuming enumeration for {path:?}");
                }
                self.stats.record_resume();
                (active.base, Some(active.cursor))
            }
            _ => {
                if self.config.log_queries {
                    debug!("fresh {mode:?} query for {path:?}");
                }
                (self.resolve_base(&expression)?, None)
            }
        };

        let step = evaluate_terminal(&mut self.store, base, expression.terminal(), mode, resumed);
        match step.result {
            Ok(value) => {
                if mode.is_list() {
                    if let Some(cursor) = step.cursor {
                        if !resuming {
                            self.stats.record_enumeration_started();
                        }
                        self.continuation.install(path.to_string(), base, cursor);
                    }
                }
                Ok(value)
            }
            Err(error) => {
                // a failed resume leaves the enumeration as it was, so
                // the caller may retry or abandon it
                if resuming {
                    if let Some(cursor) = step.cursor {
                        self.continuation.install(path.to_string(), base, cursor);
                    }
                }
                Err(error)
            }
        }
    }

    /// Walk the interior segments from the root down to the terminal's
    /// base node
    fn resolve_base(&mut self, expression: &PathExpression) -> QueryResult<NodeHandle> {
        let mut current = self.store.root();
        for segment in expression.interior() {
            current = resolve_step(&mut self.store, current, segment)?;
        }
        Ok(current)
    }
}
