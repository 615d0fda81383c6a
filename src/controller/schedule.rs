//! Task identifiers and the per-mode task tables

use wheelbot_core::link::LinkMode;
use wheelbot_core::parameters::SchedulerParams;
use wheelbot_core::scheduler::{SchedulerError, TaskMetadata, TaskTable};

/// Periodic tasks of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Read orientation, acceleration and angular rate
    Imu,
    /// Sweep all multiplexer channels and publish the bitfields
    MuxSweep,
    /// Read the range scanner and the fixed rangers
    Range,
    /// Read wheel odometers
    Odometry,
    /// Feed inbound bytes through the frame receiver
    Receive,
    /// Step the motion state machine (or mix the remote stick)
    Wheels,
    /// Apply arm targets on change
    Arm,
    /// Apply audio mode on change
    Peripherals,
    /// Serialize and send the telemetry record
    Transmit,
    /// Read the remote joystick link
    RemotePoll,
}

impl TaskId {
    pub const fn name(self) -> &'static str {
        match self {
            TaskId::Imu => "imu",
            TaskId::MuxSweep => "mux_sweep",
            TaskId::Range => "range",
            TaskId::Odometry => "odometry",
            TaskId::Receive => "receive",
            TaskId::Wheels => "wheels",
            TaskId::Arm => "arm",
            TaskId::Peripherals => "peripherals",
            TaskId::Transmit => "transmit",
            TaskId::RemotePoll => "remote_poll",
        }
    }

    /// Configured period of this task
    pub const fn period_ms(self, params: &SchedulerParams) -> u32 {
        match self {
            TaskId::Imu => params.imu_ms,
            TaskId::MuxSweep => params.mux_ms,
            TaskId::Range => params.range_ms,
            TaskId::Odometry => params.odometry_ms,
            TaskId::Receive => params.receive_ms,
            TaskId::Wheels => params.wheels_ms,
            TaskId::Arm => params.arm_ms,
            TaskId::Peripherals => params.peripherals_ms,
            TaskId::Transmit => params.transmit_ms,
            TaskId::RemotePoll => params.remote_ms,
        }
    }
}

/// Pass order in supervised modes; transmit runs after every other update
pub const SUPERVISED_ORDER: [TaskId; 9] = [
    TaskId::Imu,
    TaskId::MuxSweep,
    TaskId::Range,
    TaskId::Odometry,
    TaskId::Receive,
    TaskId::Wheels,
    TaskId::Arm,
    TaskId::Peripherals,
    TaskId::Transmit,
];

/// Pass order in remote mode
pub const REMOTE_ORDER: [TaskId; 2] = [TaskId::RemotePoll, TaskId::Wheels];

/// Build the fixed task table for `mode`
pub fn build_table(
    mode: LinkMode,
    params: &SchedulerParams,
) -> Result<TaskTable<TaskId>, SchedulerError> {
    let order: &[TaskId] = if mode.is_supervised() {
        &SUPERVISED_ORDER
    } else {
        &REMOTE_ORDER
    };

    let mut table = TaskTable::new();
    for &task in order {
        table.register(task, TaskMetadata::new(task.name(), task.period_ms(params)))?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supervised_table_order_and_periods() {
        let table = build_table(LinkMode::SupervisedSerial, &SchedulerParams::default()).unwrap();
        let names: Vec<_> = table.iter().map(|slot| slot.meta().name).collect();
        assert_eq!(
            names,
            [
                "imu",
                "mux_sweep",
                "range",
                "odometry",
                "receive",
                "wheels",
                "arm",
                "peripherals",
                "transmit"
            ]
        );
        let periods: Vec<_> = table.iter().map(|slot| slot.meta().period_ms).collect();
        assert_eq!(periods, [15, 15, 5, 5, 49, 33, 5, 5, 48]);
    }

    #[test]
    fn test_remote_table() {
        let table = build_table(LinkMode::Remote, &SchedulerParams::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.slot(0).unwrap().task(), TaskId::RemotePoll);
        assert_eq!(table.slot(0).unwrap().meta().period_ms, 5);
        assert_eq!(table.slot(1).unwrap().task(), TaskId::Wheels);
    }

    #[test]
    fn test_zero_period_rejected() {
        let params = SchedulerParams {
            transmit_ms: 0,
            ..SchedulerParams::default()
        };
        assert_eq!(
            build_table(LinkMode::SupervisedRadio, &params).err(),
            Some(SchedulerError::ZeroPeriod)
        );
    }
}
