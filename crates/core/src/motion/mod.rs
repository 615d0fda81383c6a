//! Motion state machine
//!
//! Turns the latest command into wheel setpoints and tracks progress against
//! elapsed time and measured heading, one scheduler slice at a time.
//!
//! # Lifecycle
//!
//! 1. `Idle` (done): a pending command is latched, the heading is snapshot
//!    and the move clock starts
//! 2. `Executing`: each step drives the wheels for the active move type and
//!    evaluates its exit rule
//! 3. Exit: wheels stop and the machine is `Idle` again
//!
//! An undefined move type enters `Stalled`: actuators are left alone and the
//! status stays "executing" until a new validated command supersedes it.

mod controller;
mod state;

pub use controller::{MotionController, MotionEvent, MotionOutput};
pub use state::{ActiveMove, ExitRule, MotionState};
