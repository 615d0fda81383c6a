//! Time-triggered polling kernel
//!
//! The controller owns the board, the clock and every record the tasks share.
//! Each [`Controller::tick`] is one pass over the fixed task table: every due
//! task body runs to completion, in table order, before the next is checked.
//! There are no locks and no preemption; each record has exactly one writing
//! task.
//!
//! ```ignore
//! let board = RobotBoard::take()?;
//! let mut controller = Controller::new(board, EmbassyTime, ControllerConfig::default())?;
//! controller.run();
//! ```

mod config;
mod schedule;
mod tasks;

#[cfg(test)]
mod tests;

pub use config::{boot_link_mode, default_store, ControllerConfig};
pub use schedule::{build_table, TaskId, REMOTE_ORDER, SUPERVISED_ORDER};
pub use tasks::{DIGITAL_ADDRESSES, LIMIT_ADDRESSES};

use core::fmt;

use heapless::Deque;
use wheelbot_core::link::{LinkMode, RemoteInput};
use wheelbot_core::motion::MotionController;
use wheelbot_core::protocol::{FrameReceiver, ReceiverStats};
use wheelbot_core::scheduler::{SchedulerError, SchedulerStats, TaskTable};
use wheelbot_core::store::{CommandStore, TelemetryRecord};

use crate::core::traits::TimeSource;
use crate::platform::traits::{Board, RadioConfig, RadioRole, RadioLink, SerialPort};
use crate::platform::PlatformError;
use crate::{log_info, log_warn};

/// Capacity of the queue holding command bytes from radio acknowledgements
pub const ACK_QUEUE_LEN: usize = 64;

/// Errors while building the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    /// The task table could not be built
    Scheduler(SchedulerError),
    /// A link could not be configured
    Platform(PlatformError),
}

impl From<SchedulerError> for ControllerError {
    fn from(err: SchedulerError) -> Self {
        ControllerError::Scheduler(err)
    }
}

impl From<PlatformError> for ControllerError {
    fn from(err: PlatformError) -> Self {
        ControllerError::Platform(err)
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Scheduler(e) => write!(f, "scheduler: {}", e),
            ControllerError::Platform(e) => write!(f, "platform: {}", e),
        }
    }
}

/// Link-level counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Telemetry frames handed to the active link
    pub frames_sent: u32,
    /// Acknowledgement bytes dropped because the queue was full
    pub ack_overflow: u32,
}

/// The controller: board, clock, task table and the shared records
pub struct Controller<B: Board, T: TimeSource> {
    board: B,
    time: T,
    config: ControllerConfig,
    table: TaskTable<TaskId>,
    telemetry: TelemetryRecord,
    commands: CommandStore,
    receiver: FrameReceiver,
    motion: MotionController,
    remote: RemoteInput,
    ack_queue: Deque<u8, ACK_QUEUE_LEN>,
    applied_arm: Option<([i16; 3], i8)>,
    applied_audio: Option<i8>,
    link_stats: LinkStats,
}

impl<B: Board, T: TimeSource> Controller<B, T> {
    /// Build the task table and configure the links for the boot mode
    pub fn new(mut board: B, time: T, config: ControllerConfig) -> Result<Self, ControllerError> {
        let mode = config.mode();
        let table = schedule::build_table(mode, &config.scheduler)?;

        board.serial().set_baud_rate(mode.serial_baud())?;
        let radio_role = match mode {
            LinkMode::Remote => Some(RadioRole::Receiver),
            LinkMode::SupervisedRadio => Some(RadioRole::Transmitter),
            LinkMode::SupervisedSerial => None,
        };
        if let Some(role) = radio_role {
            board
                .radio()
                .configure(&RadioConfig::from_params(&config.link, role))?;
        }

        log_info!(
            "controller up: mode {}, {} tasks, serial {} baud",
            mode.name(),
            table.len(),
            mode.serial_baud()
        );

        Ok(Self {
            board,
            time,
            table,
            telemetry: TelemetryRecord::default(),
            commands: CommandStore::new(),
            receiver: FrameReceiver::new(),
            motion: MotionController::new(config.motion),
            remote: RemoteInput::new(config.link.timeout_ms),
            ack_queue: Deque::new(),
            applied_arm: None,
            applied_audio: None,
            link_stats: LinkStats::default(),
            config,
        })
    }

    /// One pass over the task table
    ///
    /// The clock is read again before each slot so that a slow task delays
    /// only the tasks after it. A failing task is logged and counted; the
    /// pass continues.
    pub fn tick(&mut self) {
        self.table.begin_pass(self.time.now_ms());

        for index in 0..self.table.len() {
            let now_ms = self.time.now_ms();
            let Some(task) = self.table.fire_if_due(index, now_ms) else {
                continue;
            };
            if let Err(err) = self.run_task(task, now_ms) {
                self.table.record_error(index);
                log_warn!("task {} failed: {}", task.name(), err);
            }
        }
    }

    /// Run the kernel forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    pub fn mode(&self) -> LinkMode {
        self.config.mode()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn telemetry(&self) -> &TelemetryRecord {
        &self.telemetry
    }

    pub fn commands(&self) -> &CommandStore {
        &self.commands
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn remote(&self) -> &RemoteInput {
        &self.remote
    }

    pub fn table(&self) -> &TaskTable<TaskId> {
        &self.table
    }

    pub fn scheduler_stats(&self) -> SchedulerStats {
        self.table.stats()
    }

    pub fn receiver_stats(&self) -> ReceiverStats {
        self.receiver.stats()
    }

    pub fn link_stats(&self) -> LinkStats {
        self.link_stats
    }
}
