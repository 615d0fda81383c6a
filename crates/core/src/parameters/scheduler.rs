//! Task period parameters
//!
//! # Parameters
//!
//! - `SCHED_IMU_MS` - inertial sensor poll period
//! - `SCHED_MUX_MS` - multiplexer sweep period
//! - `SCHED_RANGE_MS` - range scanner poll period
//! - `SCHED_ODO_MS` - odometer poll period
//! - `SCHED_TX_MS` - telemetry transmit period
//! - `SCHED_RX_MS` - command receive period
//! - `SCHED_WHEEL_MS` - wheel update period
//! - `SCHED_ARM_MS` - arm update period
//! - `SCHED_PERIPH_MS` - peripheral update period
//! - `SCHED_RC_MS` - remote link poll period (remote mode only)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

/// Task periods in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerParams {
    pub imu_ms: u32,
    pub mux_ms: u32,
    pub range_ms: u32,
    pub odometry_ms: u32,
    pub transmit_ms: u32,
    pub receive_ms: u32,
    pub wheels_ms: u32,
    pub arm_ms: u32,
    pub peripherals_ms: u32,
    pub remote_ms: u32,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            imu_ms: 15,
            mux_ms: 15,
            range_ms: 5,
            odometry_ms: 5,
            transmit_ms: 48,
            receive_ms: 49,
            wheels_ms: 33,
            arm_ms: 5,
            peripherals_ms: 5,
            remote_ms: 5,
        }
    }
}

impl SchedulerParams {
    fn entries(&self) -> [(&'static str, u32); 10] {
        [
            ("SCHED_IMU_MS", self.imu_ms),
            ("SCHED_MUX_MS", self.mux_ms),
            ("SCHED_RANGE_MS", self.range_ms),
            ("SCHED_ODO_MS", self.odometry_ms),
            ("SCHED_TX_MS", self.transmit_ms),
            ("SCHED_RX_MS", self.receive_ms),
            ("SCHED_WHEEL_MS", self.wheels_ms),
            ("SCHED_ARM_MS", self.arm_ms),
            ("SCHED_PERIPH_MS", self.peripherals_ms),
            ("SCHED_RC_MS", self.remote_ms),
        ]
    }

    /// Register task periods with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        for (name, period) in Self::default().entries() {
            store.register(name, ParamValue::Int(period as i32), ParamFlags::empty())?;
        }
        Ok(())
    }

    /// Load task periods from the store
    ///
    /// Missing or non-positive values fall back to the default period; a
    /// zero period would make a task fire on every pass.
    pub fn from_store(store: &ParameterStore) -> Self {
        let defaults = Self::default();
        let read = |name: &str, default: u32| match store.get_int_or(name, default as i32) {
            v if v > 0 => v as u32,
            _ => default,
        };

        Self {
            imu_ms: read("SCHED_IMU_MS", defaults.imu_ms),
            mux_ms: read("SCHED_MUX_MS", defaults.mux_ms),
            range_ms: read("SCHED_RANGE_MS", defaults.range_ms),
            odometry_ms: read("SCHED_ODO_MS", defaults.odometry_ms),
            transmit_ms: read("SCHED_TX_MS", defaults.transmit_ms),
            receive_ms: read("SCHED_RX_MS", defaults.receive_ms),
            wheels_ms: read("SCHED_WHEEL_MS", defaults.wheels_ms),
            arm_ms: read("SCHED_ARM_MS", defaults.arm_ms),
            peripherals_ms: read("SCHED_PERIPH_MS", defaults.peripherals_ms),
            remote_ms: read("SCHED_RC_MS", defaults.remote_ms),
        }
    }
}
