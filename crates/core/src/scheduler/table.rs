//! Fixed periodic task table
//!
//! The table is filled once while the controller is being built and is never
//! resized afterwards. The kernel drives it one slot at a time so that each
//! task can read the clock at its own turn: a slow task delays the tasks
//! after it for that pass only.
//!
//! ```text
//! begin_pass(now)
//! for index in 0..len:
//!     now = clock
//!     if let Some(task) = fire_if_due(index, now):
//!         run(task)
//! ```

use heapless::Vec;

use super::types::{SchedulerError, SchedulerStats, TaskMetadata, TaskStats};

/// Maximum number of tasks a table can hold
pub const MAX_TASKS: usize = 16;

/// One entry of the task table
#[derive(Debug, Clone, Copy)]
pub struct TaskSlot<T> {
    task: T,
    meta: TaskMetadata,
    last_fire_ms: u64,
    stats: TaskStats,
}

impl<T: Copy> TaskSlot<T> {
    /// Task identifier
    pub fn task(&self) -> T {
        self.task
    }

    /// Task metadata
    pub fn meta(&self) -> &TaskMetadata {
        &self.meta
    }

    /// Clock reading of the last fire (0 before the first fire)
    pub fn last_fire_ms(&self) -> u64 {
        self.last_fire_ms
    }

    /// Runtime statistics
    pub fn stats(&self) -> &TaskStats {
        &self.stats
    }
}

/// Fixed table of periodic tasks identified by `T`
#[derive(Debug)]
pub struct TaskTable<T> {
    slots: Vec<TaskSlot<T>, MAX_TASKS>,
    stats: SchedulerStats,
}

impl<T: Copy> Default for TaskTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> TaskTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            stats: SchedulerStats::default(),
        }
    }

    /// Append a task; the pass order is the registration order
    ///
    /// Returns the slot index.
    pub fn register(&mut self, task: T, meta: TaskMetadata) -> Result<usize, SchedulerError> {
        if meta.period_ms == 0 {
            return Err(SchedulerError::ZeroPeriod);
        }
        let index = self.slots.len();
        self.slots
            .push(TaskSlot {
                task,
                meta,
                last_fire_ms: 0,
                stats: TaskStats::default(),
            })
            .map_err(|_| SchedulerError::TableFull)?;
        Ok(index)
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no task is registered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Mark the start of a pass over the table
    pub fn begin_pass(&mut self, now_ms: u64) {
        self.stats.passes = self.stats.passes.saturating_add(1);
        self.stats.last_pass_ms = now_ms;
    }

    /// Fire the task at `index` if its period has elapsed
    ///
    /// On fire the slot's `last_fire` becomes `now_ms` and the task id is
    /// returned for the caller to run. Out-of-range indices never fire.
    pub fn fire_if_due(&mut self, index: usize, now_ms: u64) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if !slot.meta.is_due(slot.last_fire_ms, now_ms) {
            return None;
        }

        let observed = now_ms.saturating_sub(slot.last_fire_ms);
        let observed = u32::try_from(observed).unwrap_or(u32::MAX);
        slot.stats.record_fire(observed, &slot.meta);
        slot.last_fire_ms = now_ms;
        Some(slot.task)
    }

    /// Count an error returned by the task at `index`
    pub fn record_error(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.stats.record_error();
        }
    }

    /// Slot at `index`
    pub fn slot(&self, index: usize) -> Option<&TaskSlot<T>> {
        self.slots.get(index)
    }

    /// Find a slot by task name
    pub fn find(&self, name: &str) -> Option<(usize, &TaskSlot<T>)> {
        self.slots
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.meta.name == name)
    }

    /// Iterate over all slots in pass order
    pub fn iter(&self) -> impl Iterator<Item = &TaskSlot<T>> {
        self.slots.iter()
    }

    /// Table-wide statistics with totals re-derived from the slots
    pub fn stats(&self) -> SchedulerStats {
        let mut stats = self.stats;
        stats.update_totals(self.slots.iter().map(|slot| &slot.stats));
        stats
    }
}
