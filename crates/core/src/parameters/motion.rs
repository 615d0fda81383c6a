//! Motion parameters
//!
//! # Parameters
//!
//! - `MOT_STOP_MS` - STOP hold time
//! - `MOT_FWD_MS` - STRAIGHT_BY_HEADING duration
//! - `MOT_BACK_MS` - BACK_BY_HEADING duration
//! - `MOT_SPIN_MS` - ROTATE_IN_PLACE watchdog
//! - `MOT_PIVOT_MS` - ROTATE_ON_WHEEL watchdog
//! - `MOT_CRUISE` - wheel setpoint magnitude for rotations

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::store::{MoveType, WHEEL_SETPOINT_LIMIT};

/// Per-move time budgets and drive magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionParams {
    pub stop_ms: u32,
    pub straight_ms: u32,
    pub back_ms: u32,
    pub spin_ms: u32,
    pub pivot_ms: u32,
    pub cruise: i16,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            stop_ms: 500,
            straight_ms: 500,
            back_ms: 500,
            spin_ms: 3_600_000,
            pivot_ms: 3_600_000,
            cruise: 100,
        }
    }
}

impl MotionParams {
    /// Time budget for a move type
    pub fn budget_ms(&self, kind: MoveType) -> u32 {
        match kind {
            MoveType::Stop => self.stop_ms,
            MoveType::StraightByHeading => self.straight_ms,
            MoveType::BackByHeading => self.back_ms,
            MoveType::RotateInPlace => self.spin_ms,
            MoveType::RotateOnWheel => self.pivot_ms,
        }
    }

    /// Register motion parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        let d = Self::default();
        store.register("MOT_STOP_MS", ParamValue::Int(d.stop_ms as i32), ParamFlags::empty())?;
        store.register("MOT_FWD_MS", ParamValue::Int(d.straight_ms as i32), ParamFlags::empty())?;
        store.register("MOT_BACK_MS", ParamValue::Int(d.back_ms as i32), ParamFlags::empty())?;
        store.register("MOT_SPIN_MS", ParamValue::Int(d.spin_ms as i32), ParamFlags::empty())?;
        store.register("MOT_PIVOT_MS", ParamValue::Int(d.pivot_ms as i32), ParamFlags::empty())?;
        store.register("MOT_CRUISE", ParamValue::Int(d.cruise as i32), ParamFlags::empty())?;
        Ok(())
    }

    /// Load motion parameters from the store
    ///
    /// Negative budgets read as zero; cruise is clamped to the setpoint range.
    pub fn from_store(store: &ParameterStore) -> Self {
        let d = Self::default();
        let budget = |name: &str, default: u32| store.get_int_or(name, default as i32).max(0) as u32;
        let limit = i32::from(WHEEL_SETPOINT_LIMIT);

        Self {
            stop_ms: budget("MOT_STOP_MS", d.stop_ms),
            straight_ms: budget("MOT_FWD_MS", d.straight_ms),
            back_ms: budget("MOT_BACK_MS", d.back_ms),
            spin_ms: budget("MOT_SPIN_MS", d.spin_ms),
            pivot_ms: budget("MOT_PIVOT_MS", d.pivot_ms),
            cruise: store
                .get_int_or("MOT_CRUISE", i32::from(d.cruise))
                .clamp(-limit, limit) as i16,
        }
    }
}
