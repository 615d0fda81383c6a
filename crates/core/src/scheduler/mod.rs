//! Time-triggered polling kernel types
//!
//! The controller emulates concurrency with a fixed table of independently
//! periodic tasks. Each kernel tick is one pass over the table in a fixed
//! order; a task runs when `now - last_fire >= period` and its `last_fire`
//! becomes `now`. Tasks never preempt each other and the table is built once
//! at startup.
//!
//! # Components
//!
//! - [`types`]: Task metadata, per-task and per-table statistics, errors
//! - [`table`]: The task table itself
//!
//! # Example
//!
//! ```rust
//! use wheelbot_core::scheduler::{TaskMetadata, TaskTable};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Task {
//!     Imu,
//!     Transmit,
//! }
//!
//! let mut table = TaskTable::new();
//! table.register(Task::Imu, TaskMetadata::new("imu", 15)).unwrap();
//! table.register(Task::Transmit, TaskMetadata::new("transmit", 48)).unwrap();
//!
//! table.begin_pass(15);
//! assert_eq!(table.fire_if_due(0, 15), Some(Task::Imu));
//! assert_eq!(table.fire_if_due(1, 15), None);
//! ```

pub mod table;
pub mod types;

pub use table::*;
pub use types::*;
