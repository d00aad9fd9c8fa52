//! Engine configuration
//!
//! Runtime knobs for the query engine, serde-friendly so embedders can
//! load them from their own configuration files.

use serde::{Deserialize, Serialize};

/// Default maximum accepted path length in bytes
pub const DEFAULT_MAX_PATH_LENGTH: usize = 4096;

/// Tunable limits and switches for the query engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Longest accepted path expression in bytes; longer inputs are
    /// rejected at compile time, never truncated
    pub max_path_length: usize,
    /// Emit a debug log line per query with its resume/fresh decision
    pub log_queries: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            log_queries: false,
        }
    }
}

impl EngineConfig {
    /// Cap the accepted path length
    ///
    /// # Examples
    /// ```
    /// use confq_client::EngineConfig;
    ///
    /// let config = EngineConfig::default().with_max_path_length(256);
    /// assert_eq!(config.max_path_length, 256);
    /// ```
    #[must_use]
    pub fn with_max_path_length(mut self, limit: usize) -> Self {
        self.max_path_length = limit;
        self
    }

    /// Enable or disable per-query debug logging
    #[must_use]
    pub fn with_query_logging(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }
}
