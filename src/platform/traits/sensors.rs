//! Sensor driver interfaces

use crate::platform::Result;
use wheelbot_core::store::{Orientation, RangeScan, Vector3};

/// One fused sample from the inertial unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InertialSample {
    /// Yaw/pitch/roll, radians ×1000
    pub orientation: Orientation,
    pub accel: Vector3,
    pub gyro: Vector3,
}

/// Inertial measurement unit with on-chip fusion
pub trait InertialSensor {
    /// Latest fused sample, `None` when no new sample is ready
    fn poll(&mut self) -> Result<Option<InertialSample>>;
}

/// Analog multiplexer in front of the digital sensors
///
/// The controller owns the sweep: it selects each address in turn and reads
/// the shared signal line.
pub trait SensorMux {
    /// Drive the select lines; `address` = s0 + 2·s1 + 4·s2
    fn select(&mut self, address: u8) -> Result<()>;

    /// Read the signal line for the selected address
    fn read(&mut self) -> Result<bool>;
}

/// Rotating range finder on a servo sweep
pub trait RangeScanner {
    /// Latest angle and distance, `None` when nothing new was measured
    fn poll(&mut self) -> Result<Option<RangeScan>>;
}

/// Pair of fixed ranging sensors
pub trait Rangers {
    fn distances(&mut self) -> Result<[i16; 2]>;
}

/// Left and right wheel odometers
pub trait Odometer {
    /// Current left/right counts
    fn counts(&mut self) -> Result<[i16; 2]>;
}
