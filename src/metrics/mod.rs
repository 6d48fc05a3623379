//! Basic metrics instrumentation for an interactive session.
//!
//! Provides counters and duration tracking for handled commands.

use crate::error::CommandError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for one session.
///
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    /// Total number of commands dispatched (unknown ones included)
    commands_total: Arc<AtomicU64>,

    /// Total time spent in handlers, in microseconds
    command_duration_total_us: Arc<AtomicU64>,

    /// Commands that did not match any known name
    unknown_commands_total: Arc<AtomicU64>,

    /// Failures translated from CommandError::InvalidFormat
    invalid_format_total: Arc<AtomicU64>,

    /// Failures translated from CommandError::NotFound
    not_found_total: Arc<AtomicU64>,

    /// Failures translated from CommandError::NotEnoughArgs
    not_enough_args_total: Arc<AtomicU64>,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            command_duration_total_us: Arc::new(AtomicU64::new(0)),
            unknown_commands_total: Arc::new(AtomicU64::new(0)),
            invalid_format_total: Arc::new(AtomicU64::new(0)),
            not_found_total: Arc::new(AtomicU64::new(0)),
            not_enough_args_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a handled command with its duration.
    pub fn record_command(&self, duration: Duration) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.command_duration_total_us
            .fetch_add(micros, Ordering::Relaxed);
    }

    /// Record a command name that matched no handler.
    pub fn record_unknown_command(&self) {
        self.unknown_commands_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a handler failure by kind.
    pub fn record_failure(&self, error: &CommandError) {
        let counter = match error {
            CommandError::InvalidFormat(_) => &self.invalid_format_total,
            CommandError::NotFound(_) => &self.not_found_total,
            CommandError::NotEnoughArgs { .. } => &self.not_enough_args_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn unknown_commands_total(&self) -> u64 {
        self.unknown_commands_total.load(Ordering::Relaxed)
    }

    /// Get total failures across all kinds.
    pub fn failures_total(&self) -> u64 {
        self.invalid_format_total.load(Ordering::Relaxed)
            + self.not_found_total.load(Ordering::Relaxed)
            + self.not_enough_args_total.load(Ordering::Relaxed)
    }

    /// Get average command duration in microseconds.
    pub fn command_duration_avg_us(&self) -> f64 {
        let total = self.command_duration_total_us.load(Ordering::Relaxed);
        let count = self.commands_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total(),
            command_duration_avg_us: self.command_duration_avg_us(),
            unknown_commands_total: self.unknown_commands_total(),
            invalid_format_total: self.invalid_format_total.load(Ordering::Relaxed),
            not_found_total: self.not_found_total.load(Ordering::Relaxed),
            not_enough_args_total: self.not_enough_args_total.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub command_duration_avg_us: f64,
    pub unknown_commands_total: u64,
    pub invalid_format_total: u64,
    pub not_found_total: u64,
    pub not_enough_args_total: u64,
}

/// Helper for timing a single command.
pub struct CommandTimer {
    start: Instant,
    metrics: SessionMetrics,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(metrics: SessionMetrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) -> Duration {
        let duration = self.start.elapsed();
        self.metrics.record_command(duration);
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = SessionMetrics::new();
        assert_eq!(metrics.commands_total(), 0);
        assert_eq!(metrics.failures_total(), 0);
        assert_eq!(metrics.command_duration_avg_us(), 0.0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = SessionMetrics::new();
        metrics.record_command(Duration::from_micros(100));
        metrics.record_command(Duration::from_micros(300));
        assert_eq!(metrics.commands_total(), 2);
        assert_eq!(metrics.command_duration_avg_us(), 200.0);
    }

    #[test]
    fn test_oversized_duration_saturates() {
        let metrics = SessionMetrics::new();
        metrics.record_command(Duration::MAX);
        assert_eq!(metrics.command_duration_avg_us(), u64::MAX as f64);
    }

    #[test]
    fn test_failures_by_kind() {
        let metrics = SessionMetrics::new();
        metrics.record_failure(&CommandError::InvalidFormat("bad".into()));
        metrics.record_failure(&CommandError::NotFound("bob".into()));
        metrics.record_failure(&CommandError::NotEnoughArgs {
            expected: 1,
            got: 0,
        });
        metrics.record_failure(&CommandError::NotEnoughArgs {
            expected: 3,
            got: 2,
        });

        let summary = metrics.summary();
        assert_eq!(summary.invalid_format_total, 1);
        assert_eq!(summary.not_found_total, 1);
        assert_eq!(summary.not_enough_args_total, 2);
        assert_eq!(metrics.failures_total(), 4);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = SessionMetrics::new();
        let timer = CommandTimer::new(metrics.clone());
        timer.complete();
        metrics.clone().record_unknown_command();

        assert_eq!(metrics.commands_total(), 1);
        assert_eq!(metrics.unknown_commands_total(), 1);
    }
}
