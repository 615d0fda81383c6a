//! Mock board for testing
//!
//! In-memory drivers that record what the controller commanded and replay
//! what a test injected. Available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use wheelbot::platform::mock::MockBoard;
//!
//! let mut board = MockBoard::new();
//! board.serial.inject_rx_data(b"#...");
//! board.mux.set_level(2, true);
//! ```

#![cfg(any(test, feature = "mock"))]

mod actuators;
mod board;
mod link;
mod sensors;

pub use actuators::{MockArm, MockPeripherals, MockWheels};
pub use board::MockBoard;
pub use link::{MockRadio, MockSerial};
pub use sensors::{MockImu, MockMux, MockOdometer, MockRangeScanner, MockRangers};
