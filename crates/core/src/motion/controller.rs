//! Motion controller: latching, dispatch and exit evaluation

use super::state::{drive_for, heading_reached, ActiveMove, ExitRule, MotionState};
use crate::parameters::MotionParams;
use crate::store::{CommandRecord, CommandStore, MoveStatus, MoveType, WheelSetpoints};

/// Notable transitions, reported for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// A command was latched and its move begins on the next step
    Started { kind: MoveType, value: i8 },
    /// The move met its exit rule
    Finished { kind: MoveType, elapsed_ms: u64 },
    /// A rotation exhausted its time budget before reaching the heading target
    TimedOut { kind: MoveType, elapsed_ms: u64 },
    /// The latched command carried an undefined move type
    UnknownMoveType { move_type: i8, move_value: i8 },
}

/// Result of one controller step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionOutput {
    /// Wheel command for this step; `None` leaves the wheels untouched
    pub wheels: Option<WheelSetpoints>,
    pub status: MoveStatus,
    pub event: Option<MotionEvent>,
}

impl MotionOutput {
    fn hold(status: MoveStatus) -> Self {
        Self {
            wheels: None,
            status,
            event: None,
        }
    }
}

/// Motion state machine driven once per wheel task run
#[derive(Debug, Clone)]
pub struct MotionController {
    state: MotionState,
    params: MotionParams,
}

impl MotionController {
    pub fn new(params: MotionParams) -> Self {
        Self {
            state: MotionState::Idle,
            params,
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Advance the state machine by one step
    ///
    /// When idle or stalled, a pending command is latched together with the
    /// current heading and clock; its move is dispatched from the next step
    /// on. While a move is executing, new commands stay pending.
    pub fn step(&mut self, now_ms: u64, heading: i16, commands: &mut CommandStore) -> MotionOutput {
        match self.state {
            MotionState::Executing(active) => self.advance(active, now_ms, heading),
            MotionState::Idle | MotionState::Stalled { .. } => match commands.take_pending() {
                Some(command) => self.latch(&command, now_ms, heading),
                None => MotionOutput::hold(self.state.status()),
            },
        }
    }

    fn latch(&mut self, command: &CommandRecord, now_ms: u64, heading: i16) -> MotionOutput {
        let event = match MoveType::from_raw(command.move_type) {
            Some(kind) => {
                self.state = MotionState::Executing(ActiveMove {
                    kind,
                    value: command.move_value,
                    heading_at_start: heading,
                    started_ms: now_ms,
                });
                MotionEvent::Started {
                    kind,
                    value: command.move_value,
                }
            }
            None => {
                self.state = MotionState::Stalled {
                    move_type: command.move_type,
                    move_value: command.move_value,
                };
                MotionEvent::UnknownMoveType {
                    move_type: command.move_type,
                    move_value: command.move_value,
                }
            }
        };

        MotionOutput {
            wheels: None,
            status: MoveStatus::Executing,
            event: Some(event),
        }
    }

    fn advance(&mut self, active: ActiveMove, now_ms: u64, heading: i16) -> MotionOutput {
        let elapsed_ms = active.elapsed_ms(now_ms);
        let over_budget = elapsed_ms >= u64::from(self.params.budget_ms(active.kind));

        let event = match ExitRule::for_move(active.kind) {
            ExitRule::Elapsed if over_budget => Some(MotionEvent::Finished {
                kind: active.kind,
                elapsed_ms,
            }),
            ExitRule::HeadingDelta if heading_reached(active.value, active.heading_delta(heading)) => {
                Some(MotionEvent::Finished {
                    kind: active.kind,
                    elapsed_ms,
                })
            }
            ExitRule::HeadingDelta if over_budget => Some(MotionEvent::TimedOut {
                kind: active.kind,
                elapsed_ms,
            }),
            _ => None,
        };

        match event {
            Some(event) => {
                self.state = MotionState::Idle;
                MotionOutput {
                    wheels: Some(WheelSetpoints::STOP),
                    status: MoveStatus::Done,
                    event: Some(event),
                }
            }
            None => MotionOutput {
                wheels: drive_for(active.kind, active.value, self.params.cruise),
                status: MoveStatus::Executing,
                event: None,
            },
        }
    }
}
