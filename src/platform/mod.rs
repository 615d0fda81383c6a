//! Platform abstraction layer
//!
//! The controller talks to hardware only through the traits in [`traits`].
//! A board implementation bundles one driver per role behind [`Board`].

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{ActuatorError, PlatformError, RadioError, Result, SensorError, SerialError};
pub use traits::{
    ArmDrive, ArmJoint, Board, InertialSample, InertialSensor, Odometer, Peripherals, RadioAck,
    RadioConfig, RadioLink, RadioRole, RangeScanner, Rangers, SensorMux, SerialPort, WheelDrive,
    RADIO_PAYLOAD_MAX,
};
