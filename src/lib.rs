#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! wheelbot - Low-level controller for a two-wheeled robot
//!
//! A time-triggered polling kernel runs a fixed table of periodic tasks that
//! read sensors, drive the wheels and arm, and exchange fixed-size frames
//! with an upstream computer or a handheld remote. The platform-agnostic
//! logic (frame codec, command store, motion state machine, scheduler table)
//! lives in `wheelbot_core`; this crate adds hardware traits, logging and the
//! controller that wires them together.

// Platform abstraction layer
pub mod platform;

// Logging and time
pub mod core;

// Periodic task kernel
pub mod controller;

pub use wheelbot_core::{link, motion, parameters, protocol, scheduler, store};
