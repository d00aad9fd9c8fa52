//! Query engine statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Counters for engine activity over one session
#[derive(Debug)]
pub struct EngineStats {
    /// Queries executed, both modes
    pub queries_executed: AtomicU64,
    /// Scalar results returned
    pub scalar_results: AtomicU64,
    /// List-step results returned
    pub list_steps: AtomicU64,
    /// List calls that resumed an in-flight enumeration
    pub enumerations_resumed: AtomicU64,
    /// List calls that started a fresh enumeration
    pub enumerations_started: AtomicU64,
    /// Paths rejected at compile time
    pub compile_errors: AtomicU64,
    /// Lookups that missed (node or key not found)
    pub misses: AtomicU64,
    /// Failures passed through from the store
    pub store_errors: AtomicU64,
    /// Engine construction time
    pub start_time: Instant,
}

impl EngineStats {
    /// Create a zeroed counter block
    pub fn new() -> Self {
        Self {
            queries_executed: AtomicU64::new(0),
            scalar_results: AtomicU64::new(0),
            list_steps: AtomicU64::new(0),
            enumerations_resumed: AtomicU64::new(0),
            enumerations_started: AtomicU64::new(0),
            compile_errors: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            store_errors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a query call
    pub fn record_query(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a scalar result
    pub fn record_scalar(&self) {
        self.scalar_results.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a list-step result
    pub fn record_list_step(&self) {
        self.list_steps.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resumed enumeration
    pub fn record_resume(&self) {
        self.enumerations_resumed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a freshly started enumeration
    pub fn record_enumeration_started(&self) {
        self.enumerations_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a compile-time rejection
    pub fn record_compile_error(&self) {
        self.compile_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resolution or key miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a store failure
    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Time elapsed since the engine was built
    pub fn duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Point-in-time copy of all counters
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            scalar_results: self.scalar_results.load(Ordering::Relaxed),
            list_steps: self.list_steps.load(Ordering::Relaxed),
            enumerations_resumed: self.enumerations_resumed.load(Ordering::Relaxed),
            enumerations_started: self.enumerations_started.load(Ordering::Relaxed),
            compile_errors: self.compile_errors.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
            uptime_ms: self.duration().as_millis() as u64,
        }
    }
}

impl Default for EngineStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-integer copy of [`EngineStats`] for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Queries executed, both modes
    pub queries_executed: u64,
    /// Scalar results returned
    pub scalar_results: u64,
    /// List-step results returned
    pub list_steps: u64,
    /// List calls that resumed an in-flight enumeration
    pub enumerations_resumed: u64,
    /// List calls that started a fresh enumeration
    pub enumerations_started: u64,
    /// Paths rejected at compile time
    pub compile_errors: u64,
    /// Lookups that missed
    pub misses: u64,
    /// Failures passed through from the store
    pub store_errors: u64,
    /// Milliseconds since the engine was built
    pub uptime_ms: u64,
}
