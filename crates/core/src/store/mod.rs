//! Inter-task records
//!
//! The controller's tasks communicate only through these records. Each field
//! has exactly one writer task; readers never write back what they read.
//!
//! - [`TelemetryRecord`]: everything the controller knows about itself,
//!   serialized once per transmit period
//! - [`CommandRecord`] / [`CommandStore`]: the last validated instruction from
//!   upstream plus the "pending" latch consumed by the motion state machine

mod command;
mod telemetry;

pub use command::{CommandRecord, CommandStats, CommandStore, FrameOutcome, MoveType, NO_COMMAND};
pub use telemetry::{
    ArmTelemetry, DigitalSensors, LimitSwitches, MoveStatus, Orientation, RangeScan,
    TelemetryRecord, Vector3, WheelSetpoints, WHEEL_SETPOINT_LIMIT,
};
