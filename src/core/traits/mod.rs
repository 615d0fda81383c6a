//! Time abstraction for the controller
//!
//! `TimeSource` and `MockTime` live in `wheelbot_core` so that the scheduler
//! and motion logic can be tested without this crate. This module re-exports
//! them next to the embedded implementation.
//!
//! # Features
//!
//! - **`embassy`**: Enables `EmbassyTime`, backed by the Embassy time driver

pub mod time;

pub use time::{MockTime, TimeSource};

#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
