//! Mock actuators

use crate::platform::{
    traits::{ArmDrive, ArmJoint, Peripherals, WheelDrive},
    Result,
};
use std::vec::Vec;
use wheelbot_core::store::WheelSetpoints;

/// Records every wheel command
#[derive(Debug, Default)]
pub struct MockWheels {
    history: Vec<WheelSetpoints>,
}

impl MockWheels {
    /// Last applied setpoints
    pub fn last(&self) -> Option<WheelSetpoints> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[WheelSetpoints] {
        &self.history
    }
}

impl WheelDrive for MockWheels {
    fn set_wheels(&mut self, setpoints: WheelSetpoints) -> Result<()> {
        self.history.push(setpoints);
        Ok(())
    }
}

/// Holds the last joint angles and counts writes
#[derive(Debug, Default)]
pub struct MockArm {
    pub joints: [i16; 3],
    pub gripper: i8,
    pub writes: usize,
}

impl ArmDrive for MockArm {
    fn set_joint(&mut self, joint: ArmJoint, angle: i16) -> Result<()> {
        let index = match joint {
            ArmJoint::Base => 0,
            ArmJoint::Shoulder => 1,
            ArmJoint::Elbow => 2,
        };
        self.joints[index] = angle;
        self.writes += 1;
        Ok(())
    }

    fn set_gripper(&mut self, mode: i8) -> Result<()> {
        self.gripper = mode;
        self.writes += 1;
        Ok(())
    }
}

/// Records audio mode changes
#[derive(Debug, Default)]
pub struct MockPeripherals {
    pub audio: Vec<i8>,
}

impl Peripherals for MockPeripherals {
    fn set_audio(&mut self, mode: i8) -> Result<()> {
        self.audio.push(mode);
        Ok(())
    }
}
