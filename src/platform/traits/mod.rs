//! Platform abstraction traits
//!
//! One trait per driver role. Drivers are polled; none of these calls may
//! block beyond the duration of a single bus transaction.

pub mod actuators;
pub mod board;
pub mod link;
pub mod sensors;

pub use actuators::{ArmDrive, ArmJoint, Peripherals, WheelDrive};
pub use board::Board;
pub use link::{RadioAck, RadioConfig, RadioLink, RadioRole, SerialPort, RADIO_PAYLOAD_MAX};
pub use sensors::{InertialSample, InertialSensor, Odometer, RangeScanner, Rangers, SensorMux};
