//! Platform error types
//!
//! Every board implementation maps its driver-specific failures to these
//! variants. The controller never aborts on them: a failing task is logged,
//! counted in its scheduler slot and retried on its next period.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Serial port operation failed
    Serial(SerialError),
    /// Radio transceiver operation failed
    Radio(RadioError),
    /// Sensor read failed
    Sensor(SensorError),
    /// Actuator command failed
    Actuator(ActuatorError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// Serial-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    WriteFailed,
    ReadFailed,
    InvalidBaudRate,
    Overrun,
}

/// Radio-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Transceiver did not answer on its bus
    NotPresent,
    /// No acknowledgement after all retries
    TransmitFailed,
    /// Payload longer than the transceiver's maximum
    PayloadTooLarge,
    /// Channel outside the supported range
    InvalidChannel,
}

/// Sensor-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus error occurred
    BusError,
    /// No acknowledgment received
    Nack,
    /// Timeout occurred
    Timeout,
    /// Multiplexer address out of range
    InvalidChannel,
}

/// Actuator-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Setpoint outside the driver range
    OutOfRange,
    /// Output channel not available
    ChannelUnavailable,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Serial(e) => write!(f, "serial error: {:?}", e),
            PlatformError::Radio(e) => write!(f, "radio error: {:?}", e),
            PlatformError::Sensor(e) => write!(f, "sensor error: {:?}", e),
            PlatformError::Actuator(e) => write!(f, "actuator error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "resource not available"),
        }
    }
}
