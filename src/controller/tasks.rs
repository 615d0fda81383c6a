//! Task bodies
//!
//! Each body owns the telemetry fields it writes. Sensor tasks only publish
//! after every read of the pass succeeded, so a failed read leaves the
//! previous values in place.

use wheelbot_core::link::{mix_stick, LinkMode};
use wheelbot_core::motion::MotionEvent;
use wheelbot_core::protocol::{encode_telemetry, COMMAND_BODY_LEN};
use wheelbot_core::store::{
    ArmTelemetry, DigitalSensors, FrameOutcome, LimitSwitches, WheelSetpoints,
};

use super::{Controller, TaskId};
use crate::core::traits::TimeSource;
use crate::platform::traits::{
    ArmDrive, ArmJoint, Board, InertialSensor, Odometer, Peripherals, RadioLink, RangeScanner,
    Rangers, SensorMux, SerialPort, WheelDrive, RADIO_PAYLOAD_MAX,
};
use crate::platform::{PlatformError, Result, SerialError};
use crate::{log_debug, log_error, log_info, log_warn};

/// Multiplexer addresses of the digital (IR) channels, bit order
pub const DIGITAL_ADDRESSES: [u8; 2] = [0, 1];

/// Multiplexer addresses of the limit switches, bit order
pub const LIMIT_ADDRESSES: [u8; 4] = [2, 3, 4, 5];

fn log_motion_event(event: MotionEvent) {
    match event {
        MotionEvent::Started { kind, value } => {
            log_info!("move {} started, value {}", kind.name(), value)
        }
        MotionEvent::Finished { kind, elapsed_ms } => {
            log_info!("move {} finished after {} ms", kind.name(), elapsed_ms)
        }
        MotionEvent::TimedOut { kind, elapsed_ms } => {
            log_warn!("move {} timed out after {} ms", kind.name(), elapsed_ms)
        }
        MotionEvent::UnknownMoveType {
            move_type,
            move_value,
        } => log_error!(
            "unknown move type {} (value {}), motion stalled",
            move_type,
            move_value
        ),
    }
}

impl<B: Board, T: TimeSource> Controller<B, T> {
    pub(super) fn run_task(&mut self, task: TaskId, now_ms: u64) -> Result<()> {
        match task {
            TaskId::Imu => self.poll_imu(),
            TaskId::MuxSweep => self.sweep_mux(),
            TaskId::Range => self.poll_range(),
            TaskId::Odometry => self.poll_odometry(),
            TaskId::Receive => self.receive_commands(),
            TaskId::Wheels => self.update_wheels(now_ms),
            TaskId::Arm => self.update_arm(),
            TaskId::Peripherals => self.update_peripherals(),
            TaskId::Transmit => self.transmit_telemetry(),
            TaskId::RemotePoll => self.poll_remote(now_ms),
        }
    }

    fn poll_imu(&mut self) -> Result<()> {
        if let Some(sample) = self.board.imu().poll()? {
            self.telemetry.orientation = sample.orientation;
            self.telemetry.accel = sample.accel;
            self.telemetry.gyro = sample.gyro;
        }
        Ok(())
    }

    fn read_mux(&mut self, address: u8) -> Result<bool> {
        let mux = self.board.mux();
        let level = mux.select(address).and_then(|()| mux.read());
        if level.is_err() {
            log_warn!("mux sweep aborted at channel {}", address);
        }
        level
    }

    fn sweep_mux(&mut self) -> Result<()> {
        let mut digital = DigitalSensors::empty();
        for (bit, &address) in DIGITAL_ADDRESSES.iter().enumerate() {
            if self.read_mux(address)? {
                digital |= DigitalSensors::from_bits_truncate(1 << bit);
            }
        }

        let mut limits = LimitSwitches::empty();
        for (bit, &address) in LIMIT_ADDRESSES.iter().enumerate() {
            if self.read_mux(address)? {
                limits |= LimitSwitches::from_bits_truncate(1 << bit);
            }
        }

        self.telemetry.digital = digital;
        self.telemetry.limits = limits;
        Ok(())
    }

    fn poll_range(&mut self) -> Result<()> {
        if let Some(scan) = self.board.scanner().poll()? {
            self.telemetry.range = scan;
        }
        self.telemetry.rangers = self.board.rangers().distances()?;
        Ok(())
    }

    fn poll_odometry(&mut self) -> Result<()> {
        let [left, right] = self.board.odometer().counts()?;
        self.telemetry.odometer_left = left;
        self.telemetry.odometer_right = right;
        Ok(())
    }

    /// Drain at most `LINK_RX_BURST` bytes from the active link
    fn receive_commands(&mut self) -> Result<()> {
        for _ in 0..self.config.link.rx_burst {
            let byte = match self.config.mode() {
                LinkMode::SupervisedRadio => self.ack_queue.pop_front(),
                _ => self.board.serial().read_byte()?,
            };
            let Some(byte) = byte else {
                break;
            };
            if let Some(body) = self.receiver.push(byte) {
                self.apply_frame(&body);
            }
        }
        Ok(())
    }

    fn apply_frame(&mut self, body: &[u8; COMMAND_BODY_LEN]) {
        match self.commands.apply_frame(body) {
            FrameOutcome::Accepted => {
                let record = self.commands.record();
                log_debug!(
                    "command accepted: move {} value {}",
                    record.move_type,
                    record.move_value
                );
            }
            FrameOutcome::Rejected(mismatch) => log_warn!(
                "command rejected: checksum {} != {}",
                mismatch.computed,
                mismatch.received
            ),
        }
    }

    fn update_wheels(&mut self, now_ms: u64) -> Result<()> {
        if !self.config.mode().is_supervised() {
            let setpoints = mix_stick(&self.remote.sample());
            return self.drive(setpoints);
        }

        let heading = self.telemetry.orientation.heading();
        let output = self.motion.step(now_ms, heading, &mut self.commands);
        self.telemetry.move_status = output.status;
        if let Some(event) = output.event {
            log_motion_event(event);
        }
        match output.wheels {
            Some(setpoints) => self.drive(setpoints),
            None => Ok(()),
        }
    }

    fn drive(&mut self, setpoints: WheelSetpoints) -> Result<()> {
        self.board.wheels().set_wheels(setpoints)?;
        self.telemetry.wheels = setpoints;
        Ok(())
    }

    fn update_arm(&mut self) -> Result<()> {
        let record = self.commands.record();
        let target = (record.arm, record.arm_mode);
        if self.applied_arm == Some(target) {
            return Ok(());
        }

        let (angles, mode) = target;
        let arm = self.board.arm();
        for (&joint, &angle) in ArmJoint::ALL.iter().zip(angles.iter()) {
            arm.set_joint(joint, angle)?;
        }
        arm.set_gripper(mode)?;

        self.applied_arm = Some(target);
        self.telemetry.arm = ArmTelemetry {
            x: angles[0],
            y: angles[1],
            z: angles[2],
            mode: i16::from(mode),
        };
        Ok(())
    }

    fn update_peripherals(&mut self) -> Result<()> {
        let audio = self.commands.record().audio_mode;
        if self.applied_audio != Some(audio) {
            self.board.peripherals().set_audio(audio)?;
            self.applied_audio = Some(audio);
        }
        Ok(())
    }

    fn transmit_telemetry(&mut self) -> Result<()> {
        let frame = encode_telemetry(&self.telemetry);

        if self.config.mode() == LinkMode::SupervisedRadio {
            for chunk in frame.chunks(RADIO_PAYLOAD_MAX) {
                if let Some(ack) = self.board.radio().transmit(chunk)? {
                    self.queue_ack(&ack);
                }
            }
        } else {
            let written = self.board.serial().write(&frame)?;
            if written < frame.len() {
                return Err(PlatformError::Serial(SerialError::WriteFailed));
            }
        }

        self.link_stats.frames_sent = self.link_stats.frames_sent.saturating_add(1);
        Ok(())
    }

    fn queue_ack(&mut self, ack: &[u8]) {
        for &byte in ack {
            if self.ack_queue.push_back(byte).is_err() {
                self.link_stats.ack_overflow = self.link_stats.ack_overflow.saturating_add(1);
            }
        }
    }

    /// The watchdog runs on every poll, including polls whose read failed
    fn poll_remote(&mut self, now_ms: u64) -> Result<()> {
        let received = self.board.radio().receive_sample();
        if let Ok(Some(sample)) = received {
            if !self.remote.is_active() {
                log_info!("remote link up");
            }
            self.remote.update(sample, now_ms);
        }

        if self.remote.check_timeout(now_ms) {
            log_warn!(
                "remote link lost after {} ms, holding neutral",
                now_ms.saturating_sub(self.remote.last_update_ms())
            );
        }
        received.map(|_| ())
    }
}
