//! Telemetry record

use bitflags::bitflags;

/// Wheel setpoints are abstract speeds in `[-WHEEL_SETPOINT_LIMIT, WHEEL_SETPOINT_LIMIT]`
pub const WHEEL_SETPOINT_LIMIT: i16 = 1000;

bitflags! {
    /// Digital (IR) sensor channels of the multiplexer
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct DigitalSensors: u8 {
        const IR_LEFT = 0b0000_0001;
        const IR_RIGHT = 0b0000_0010;
    }
}

bitflags! {
    /// Limit switch channels of the multiplexer
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct LimitSwitches: u8 {
        const SW1 = 0b0000_0001;
        const SW2 = 0b0000_0010;
        const SW3 = 0b0000_0100;
        const SW4 = 0b0000_1000;
    }
}

/// Status of the most recent move, as reported upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveStatus {
    /// A move is in progress
    Executing = 0,
    /// No move in progress
    #[default]
    Done = 1,
}

impl MoveStatus {
    /// Wire value
    pub const fn as_i16(self) -> i16 {
        self as i16
    }
}

/// Left/right wheel setpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WheelSetpoints {
    pub left: i16,
    pub right: i16,
}

impl WheelSetpoints {
    /// Both wheels stopped
    pub const STOP: Self = Self { left: 0, right: 0 };

    /// Create setpoints clamped to the driver range
    pub fn new(left: i16, right: i16) -> Self {
        Self {
            left: left.clamp(-WHEEL_SETPOINT_LIMIT, WHEEL_SETPOINT_LIMIT),
            right: right.clamp(-WHEEL_SETPOINT_LIMIT, WHEEL_SETPOINT_LIMIT),
        }
    }

    /// Build setpoints from per-wheel forward speeds
    ///
    /// The wheels are mounted mirrored: driving the right wheel forward takes
    /// a negative setpoint.
    pub fn from_forward(left_forward: i16, right_forward: i16) -> Self {
        Self::new(left_forward, right_forward.saturating_neg())
    }

    /// True if both wheels are stopped
    pub fn is_stopped(&self) -> bool {
        self.left == 0 && self.right == 0
    }
}

/// Three-axis raw sensor reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vector3 {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Orientation in radians x1000
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orientation {
    pub yaw: i16,
    pub pitch: i16,
    pub roll: i16,
}

impl Orientation {
    /// Fixed-point scale applied to radians
    pub const SCALE: f32 = 1000.0;

    /// Convert yaw/pitch/roll in radians to fixed point (truncating)
    pub fn from_radians(ypr: [f32; 3]) -> Self {
        Self {
            yaw: (ypr[0] * Self::SCALE) as i16,
            pitch: (ypr[1] * Self::SCALE) as i16,
            roll: (ypr[2] * Self::SCALE) as i16,
        }
    }

    /// Heading used by the motion state machine
    pub fn heading(&self) -> i16 {
        self.yaw
    }
}

/// Arm target as last applied to the joints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArmTelemetry {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub mode: i16,
}

/// Rotary range finder sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeScan {
    pub angle: i16,
    pub distance: i16,
}

/// Everything the controller reports upstream
///
/// Fields are written by their owning task whenever that task fires; the whole
/// record is serialized by the transmit task after all other tasks of the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelemetryRecord {
    /// Commanded wheel setpoints (wheels task)
    pub wheels: WheelSetpoints,
    /// Move status (wheels task)
    pub move_status: MoveStatus,
    /// Arm target (arm task)
    pub arm: ArmTelemetry,
    /// Acceleration (IMU task)
    pub accel: Vector3,
    /// Angular rate (IMU task)
    pub gyro: Vector3,
    /// Orientation (IMU task)
    pub orientation: Orientation,
    /// Left odometer count (odometry task)
    pub odometer_left: i16,
    /// Right odometer count (odometry task)
    pub odometer_right: i16,
    /// Rotary range finder (range task)
    pub range: RangeScan,
    /// Fixed ranging sensor distances (range task)
    pub rangers: [i16; 2],
    /// Digital sensors from the last complete mux sweep (mux task)
    pub digital: DigitalSensors,
    /// Limit switches from the last complete mux sweep (mux task)
    pub limits: LimitSwitches,
}
