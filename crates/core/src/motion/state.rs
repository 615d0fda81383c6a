//! Motion state types and the per-move transition table

use crate::store::{MoveStatus, MoveType, WheelSetpoints};

/// How a move type decides it is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRule {
    /// Finished once the move's time budget has elapsed
    Elapsed,
    /// Finished once the signed heading delta crosses the move value
    ///
    /// This is the only exit that finishes the move. Past the move's time
    /// budget (3600 s by default) the move ends with `TimedOut` instead; that
    /// watchdog exit is not part of the heading rule.
    HeadingDelta,
}

impl ExitRule {
    /// Transition table
    pub const fn for_move(kind: MoveType) -> Self {
        match kind {
            MoveType::Stop | MoveType::StraightByHeading | MoveType::BackByHeading => {
                ExitRule::Elapsed
            }
            MoveType::RotateInPlace | MoveType::RotateOnWheel => ExitRule::HeadingDelta,
        }
    }
}

/// Wheel drive for a move, `None` when the move leaves the wheels untouched
///
/// Positive values turn counter-clockwise.
pub fn drive_for(kind: MoveType, value: i8, cruise: i16) -> Option<WheelSetpoints> {
    let ccw = value > 0;
    match kind {
        MoveType::Stop => Some(WheelSetpoints::STOP),
        // TODO: heading-hold drive for straight/back once a wheel speed loop exists
        MoveType::StraightByHeading | MoveType::BackByHeading => None,
        MoveType::RotateInPlace if ccw => Some(WheelSetpoints::from_forward(-cruise, cruise)),
        MoveType::RotateInPlace => Some(WheelSetpoints::from_forward(cruise, -cruise)),
        MoveType::RotateOnWheel if ccw => Some(WheelSetpoints::from_forward(0, cruise)),
        MoveType::RotateOnWheel => Some(WheelSetpoints::from_forward(cruise, 0)),
    }
}

/// Signed heading target test; the comparison direction follows the sign of `value`
pub fn heading_reached(value: i8, heading_delta: i32) -> bool {
    let target = i32::from(value);
    if value > 0 {
        heading_delta >= target
    } else {
        heading_delta <= target
    }
}

/// A move in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMove {
    pub kind: MoveType,
    pub value: i8,
    /// Heading when the move was latched
    pub heading_at_start: i16,
    /// Clock reading when the move was latched
    pub started_ms: u64,
}

impl ActiveMove {
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    pub fn heading_delta(&self, heading: i16) -> i32 {
        i32::from(heading) - i32::from(self.heading_at_start)
    }
}

/// State of the motion state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// No move in progress; the next pending command may be latched
    #[default]
    Idle,
    /// A defined move is in progress
    Executing(ActiveMove),
    /// The latched command carried an undefined move type
    Stalled { move_type: i8, move_value: i8 },
}

impl MotionState {
    /// The "done" flag
    pub fn is_done(&self) -> bool {
        matches!(self, MotionState::Idle)
    }

    /// Status reported in telemetry
    pub fn status(&self) -> MoveStatus {
        if self.is_done() {
            MoveStatus::Done
        } else {
            MoveStatus::Executing
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MotionState::Idle => "idle",
            MotionState::Executing(_) => "executing",
            MotionState::Stalled { .. } => "stalled",
        }
    }
}
