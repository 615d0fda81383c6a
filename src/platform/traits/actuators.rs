//! Actuator driver interfaces

use crate::platform::Result;
use wheelbot_core::store::WheelSetpoints;

/// Both wheel motors
pub trait WheelDrive {
    /// Apply setpoints in [-1000, 1000]; the driver converts to PWM
    fn set_wheels(&mut self, setpoints: WheelSetpoints) -> Result<()>;
}

/// Arm joints, in command order q1..q3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmJoint {
    Base,
    Shoulder,
    Elbow,
}

impl ArmJoint {
    pub const ALL: [ArmJoint; 3] = [ArmJoint::Base, ArmJoint::Shoulder, ArmJoint::Elbow];
}

/// Multi-joint arm with a gripper
pub trait ArmDrive {
    /// Set one joint angle in degrees
    fn set_joint(&mut self, joint: ArmJoint, angle: i16) -> Result<()>;

    /// Set gripper mode
    fn set_gripper(&mut self, mode: i8) -> Result<()>;
}

/// Auxiliary outputs
pub trait Peripherals {
    /// Select an audio mode; -1 is silence
    fn set_audio(&mut self, mode: i8) -> Result<()>;
}
