//! wheelbot_core - Pure no_std control logic for the wheelbot controller
//!
//! This crate contains the platform-agnostic parts of the two-wheeled robot
//! controller. Everything here can be tested on the host without hardware,
//! feature flags or an async runtime.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies outside of tests
//! - **No logging**: Operations return outcomes and events; the platform
//!   crate decides what to log
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic time abstraction (TimeSource, MockTime)
//! - [`scheduler`]: Fixed periodic task table and statistics
//! - [`protocol`]: Telemetry/command frame codec, checksum and byte receiver
//! - [`store`]: Telemetry record and command record store
//! - [`motion`]: Motion state machine driven by command and heading
//! - [`link`]: Link mode selection, remote-control watchdog and stick mixing
//! - [`parameters`]: Parameter store and parameter groups

#![cfg_attr(not(test), no_std)]

pub mod link;
pub mod motion;
pub mod parameters;
pub mod protocol;
pub mod scheduler;
pub mod store;
pub mod traits;
