//! Core types for the periodic task table
//!
//! - Task metadata (fixed at startup)
//! - Task statistics (runtime monitoring only, never used for scheduling)
//! - Table statistics and errors

use core::fmt;

/// Task metadata fixed when the table is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMetadata {
    /// Human-readable task name for logging
    pub name: &'static str,

    /// Firing period in milliseconds
    pub period_ms: u32,
}

impl TaskMetadata {
    /// Create task metadata
    pub const fn new(name: &'static str, period_ms: u32) -> Self {
        Self { name, period_ms }
    }

    /// Check whether a task that last fired at `last_fire_ms` is due at `now_ms`
    #[inline]
    pub const fn is_due(&self, last_fire_ms: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(last_fire_ms) >= self.period_ms as u64
    }

    /// An observed period is late when at least one whole slot was missed
    #[inline]
    pub const fn is_late(&self, observed_period_ms: u32) -> bool {
        observed_period_ms >= self.period_ms.saturating_mul(2)
    }
}

/// Runtime statistics for a single task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Total number of fires
    pub fire_count: u64,

    /// Milliseconds between the last two fires
    pub last_period_ms: u32,

    /// Largest observed period
    pub max_period_ms: u32,

    /// Fires whose observed period was at least twice the nominal period
    ///
    /// A late fire means this task (or an earlier one in the pass) overran.
    pub late_fires: u32,

    /// Task bodies that returned an error
    pub errors: u32,
}

impl TaskStats {
    /// Record a fire
    ///
    /// The first fire has no meaningful period and only bumps the counter.
    pub fn record_fire(&mut self, observed_period_ms: u32, meta: &TaskMetadata) {
        if self.fire_count > 0 {
            self.last_period_ms = observed_period_ms;
            if observed_period_ms > self.max_period_ms {
                self.max_period_ms = observed_period_ms;
            }
            if meta.is_late(observed_period_ms) {
                self.late_fires = self.late_fires.saturating_add(1);
            }
        }
        self.fire_count = self.fire_count.saturating_add(1);
    }

    /// Record a task body error
    pub fn record_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Table-wide statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Completed passes over the table
    pub passes: u64,

    /// Clock reading at the start of the most recent pass
    pub last_pass_ms: u64,

    /// Late fires summed over all tasks
    pub total_late_fires: u32,

    /// Task errors summed over all tasks
    pub total_errors: u32,
}

impl SchedulerStats {
    /// Re-derive the totals from per-task statistics
    pub fn update_totals<'a>(&mut self, task_stats: impl Iterator<Item = &'a TaskStats>) {
        let (late, errors) = task_stats.fold((0u32, 0u32), |(late, errors), s| {
            (
                late.saturating_add(s.late_fires),
                errors.saturating_add(s.errors),
            )
        });
        self.total_late_fires = late;
        self.total_errors = errors;
    }
}

/// Errors from building a task table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// More tasks than the table can hold
    TableFull,
    /// A period of zero would make the task fire on every pass
    ZeroPeriod,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::TableFull => write!(f, "task table full"),
            SchedulerError::ZeroPeriod => write!(f, "task period must be non-zero"),
        }
    }
}
