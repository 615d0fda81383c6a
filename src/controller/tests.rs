use super::*;
use crate::platform::mock::MockBoard;
use crate::platform::traits::InertialSample;
use wheelbot_core::link::{RemoteSample, RemoteStatus};
use wheelbot_core::motion::MotionState;
use wheelbot_core::protocol::{encode_command, encode_telemetry, TELEMETRY_START};
use wheelbot_core::store::{
    ArmTelemetry, CommandRecord, DigitalSensors, LimitSwitches, MoveStatus, Orientation,
    RangeScan, WheelSetpoints,
};
use wheelbot_core::traits::MockTime;

type TestController = Controller<MockBoard, MockTime>;

fn controller_with(config: ControllerConfig) -> TestController {
    Controller::new(MockBoard::new(), MockTime::new(), config).unwrap()
}

fn controller(mode: LinkMode) -> TestController {
    controller_with(ControllerConfig::with_mode(mode))
}

fn run_until(controller: &mut TestController, until_ms: u64) {
    while controller.time().now_ms() < until_ms {
        controller.time().advance_ms(1);
        controller.tick();
    }
}

fn frame(move_type: i8, move_value: i8) -> [u8; 12] {
    encode_command(&CommandRecord {
        move_type,
        move_value,
        ..CommandRecord::default()
    })
}

#[test]
fn new_configures_links_per_mode() {
    let serial = controller(LinkMode::SupervisedSerial);
    assert_eq!(serial.board().serial.baud_rate(), 1_000_000);
    assert!(serial.board().radio.config().is_none());
    assert_eq!(serial.table().len(), 9);

    let radio = controller(LinkMode::SupervisedRadio);
    assert_eq!(radio.board().serial.baud_rate(), 115_200);
    let config = radio.board().radio.config().unwrap();
    assert_eq!(config.role, RadioRole::Transmitter);
    assert_eq!(config.channel, 0x6A);
    assert_eq!(config.retry_count, 15);

    let remote = controller(LinkMode::Remote);
    assert_eq!(remote.board().serial.baud_rate(), 1_000_000);
    assert_eq!(remote.board().radio.config().unwrap().role, RadioRole::Receiver);
    assert_eq!(remote.table().len(), 2);
}

#[test]
fn stop_scenario_from_serial_bytes() {
    let mut c = controller(LinkMode::SupervisedSerial);
    c.board_mut().serial.inject_rx_data(&frame(0, 0));

    run_until(&mut c, 49);
    let record = *c.commands().record();
    assert_eq!(record.move_type, 0);
    assert_eq!(record.arm, [90, 90, 90]);
    assert!(c.commands().is_pending());

    // latched on the next wheel slot, no drive yet
    run_until(&mut c, 66);
    assert_eq!(c.telemetry().move_status, MoveStatus::Executing);
    assert!(c.board().wheels.history().is_empty());

    run_until(&mut c, 593);
    assert_eq!(c.telemetry().move_status, MoveStatus::Executing);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::STOP));

    run_until(&mut c, 594);
    assert_eq!(c.telemetry().move_status, MoveStatus::Done);
    assert!(c.motion().is_done());
    assert!(c
        .board()
        .wheels
        .history()
        .iter()
        .all(WheelSetpoints::is_stopped));

    let tx = c.board().serial.tx_buffer();
    assert_eq!(tx.len() % 48, 0);
    assert_eq!(tx[0], TELEMETRY_START);
}

#[test]
fn rotation_finishes_on_heading() {
    let mut c = controller(LinkMode::SupervisedSerial);
    c.board_mut().serial.inject_rx_data(&frame(3, 90));

    run_until(&mut c, 99);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::new(-100, -100)));
    assert_eq!(c.telemetry().wheels, WheelSetpoints::new(-100, -100));

    c.board_mut().imu.push_sample(InertialSample {
        orientation: Orientation {
            yaw: 95,
            pitch: 0,
            roll: 0,
        },
        ..InertialSample::default()
    });

    run_until(&mut c, 131);
    assert_eq!(c.telemetry().orientation.heading(), 95);
    assert_eq!(c.telemetry().move_status, MoveStatus::Executing);

    run_until(&mut c, 132);
    assert_eq!(c.telemetry().move_status, MoveStatus::Done);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::STOP));
}

#[test]
fn checksum_mismatch_keeps_arm_and_silences_audio() {
    let mut c = controller(LinkMode::SupervisedSerial);
    let good = encode_command(&CommandRecord {
        move_type: 0,
        move_value: 0,
        arm: [10, 20, 30],
        arm_mode: 1,
        audio_mode: 3,
        ..CommandRecord::default()
    });
    c.board_mut().serial.inject_rx_data(&good);

    run_until(&mut c, 55);
    assert_eq!(c.board().arm.joints, [10, 20, 30]);
    assert_eq!(c.board().arm.gripper, 1);
    assert_eq!(
        c.telemetry().arm,
        ArmTelemetry {
            x: 10,
            y: 20,
            z: 30,
            mode: 1
        }
    );
    assert_eq!(c.board().peripherals.audio, [-1, 3]);

    let mut bad = frame(0, 0);
    bad[1] ^= 0x01;
    c.board_mut().serial.inject_rx_data(&bad);

    run_until(&mut c, 105);
    let record = c.commands().record();
    assert_eq!(record.arm, [10, 20, 30]);
    assert_eq!(record.arm_mode, 1);
    assert_eq!(record.move_type, -1);
    assert_eq!(record.move_value, -1);
    assert_eq!(record.audio_mode, -1);

    // boot defaults plus one change; the rejected frame did not touch the arm
    assert_eq!(c.board().arm.writes, 8);
    assert_eq!(c.board().peripherals.audio, [-1, 3, -1]);
    assert_eq!(c.commands().stats().accepted, 1);
    assert_eq!(c.commands().stats().rejected, 1);
    assert_eq!(c.receiver_stats().frames, 2);
}

#[test]
fn mux_sweep_publishes_complete_sweeps_only() {
    let mut c = controller(LinkMode::SupervisedSerial);
    c.board_mut().mux.set_level(0, true);
    c.board_mut().mux.set_level(3, true);
    c.board_mut().mux.set_level(5, true);

    run_until(&mut c, 15);
    assert_eq!(c.telemetry().digital, DigitalSensors::IR_LEFT);
    assert_eq!(c.telemetry().limits, LimitSwitches::SW2 | LimitSwitches::SW4);
    assert_eq!(c.board().mux.selections(), &[0, 1, 2, 3, 4, 5]);

    c.board_mut().mux.set_level(0, false);
    c.board_mut().mux.set_level(2, true);
    c.board_mut().mux.fail_on(Some(4));
    run_until(&mut c, 30);
    assert_eq!(c.telemetry().digital, DigitalSensors::IR_LEFT);
    assert_eq!(c.telemetry().limits, LimitSwitches::SW2 | LimitSwitches::SW4);
    let (_, slot) = c.table().find("mux_sweep").unwrap();
    assert_eq!(slot.stats().errors, 1);

    c.board_mut().mux.fail_on(None);
    run_until(&mut c, 45);
    assert_eq!(c.telemetry().digital, DigitalSensors::empty());
    assert_eq!(
        c.telemetry().limits,
        LimitSwitches::SW1 | LimitSwitches::SW2 | LimitSwitches::SW4
    );
}

#[test]
fn sensor_tasks_fill_the_transmitted_frame() {
    let mut c = controller(LinkMode::SupervisedSerial);
    c.board_mut().odometer.counts = [7, -7];
    c.board_mut().rangers.distances = [100, 200];
    c.board_mut().scanner.set_next(RangeScan {
        angle: 45,
        distance: 1200,
    });

    run_until(&mut c, 48);
    let telemetry = *c.telemetry();
    assert_eq!(telemetry.odometer_left, 7);
    assert_eq!(telemetry.odometer_right, -7);
    assert_eq!(telemetry.rangers, [100, 200]);
    assert_eq!(telemetry.range.distance, 1200);
    assert_eq!(c.board().serial.tx_buffer(), &encode_telemetry(&telemetry)[..]);
    assert_eq!(c.link_stats().frames_sent, 1);
}

#[test]
fn remote_timeout_holds_neutral() {
    let mut c = controller(LinkMode::Remote);
    let forward = RemoteSample::from_words([512, 1024, 512, 512, 0, 0]);
    c.board_mut().radio.queue_sample(forward);

    run_until(&mut c, 33);
    assert_eq!(c.remote().status(), RemoteStatus::Active);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::new(1000, -1000)));

    run_until(&mut c, 99);
    assert_eq!(c.remote().status(), RemoteStatus::Active);

    run_until(&mut c, 110);
    assert_eq!(c.remote().status(), RemoteStatus::Lost);
    assert_eq!(
        c.remote().sample(),
        RemoteSample::from_words([512, 512, 512, 512, 0, 0])
    );

    run_until(&mut c, 132);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::STOP));
    assert!(c.board().serial.tx_buffer().is_empty());

    c.board_mut().radio.queue_sample(forward);
    run_until(&mut c, 165);
    assert_eq!(c.remote().status(), RemoteStatus::Active);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::new(1000, -1000)));
}

#[test]
fn radio_link_splits_telemetry_and_reads_acks() {
    let mut c = controller(LinkMode::SupervisedRadio);
    c.board_mut().radio.queue_ack(&frame(0, 0));

    run_until(&mut c, 48);
    let sent = c.board().radio.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].len(), 32);
    assert_eq!(sent[1].len(), 16);
    assert_eq!(sent[0][0], TELEMETRY_START);

    run_until(&mut c, 49);
    assert_eq!(c.commands().stats().accepted, 1);
    assert_eq!(c.commands().record().move_type, 0);
    assert_eq!(c.link_stats().frames_sent, 1);
    assert!(c.board().serial.tx_buffer().is_empty());
}

#[test]
fn failing_task_is_counted_and_pass_continues() {
    let mut c = controller(LinkMode::SupervisedSerial);
    c.board_mut().imu.fail_next();

    run_until(&mut c, 48);
    let (_, imu) = c.table().find("imu").unwrap();
    assert_eq!(imu.stats().errors, 1);
    assert_eq!(imu.stats().fire_count, 3);
    assert_eq!(c.scheduler_stats().total_errors, 1);
    assert_eq!(c.board().serial.tx_buffer().len(), 48);
}

#[test]
fn unknown_move_type_stalls_until_superseded() {
    let mut c = controller(LinkMode::SupervisedSerial);
    c.board_mut().serial.inject_rx_data(&frame(9, 5));

    run_until(&mut c, 66);
    assert!(matches!(c.motion().state(), MotionState::Stalled { .. }));
    assert_eq!(c.telemetry().move_status, MoveStatus::Executing);

    run_until(&mut c, 1_000);
    assert!(matches!(c.motion().state(), MotionState::Stalled { .. }));
    assert!(c.board().wheels.history().is_empty());

    c.board_mut().serial.inject_rx_data(&frame(0, 0));
    run_until(&mut c, 1_056);
    assert!(matches!(c.motion().state(), MotionState::Executing(_)));
}

#[test]
fn receive_burst_is_bounded() {
    let mut config = ControllerConfig::with_mode(LinkMode::SupervisedSerial);
    config.link.rx_burst = 4;
    let mut c = controller_with(config);
    c.board_mut().serial.inject_rx_data(&frame(0, 0));

    run_until(&mut c, 49);
    assert_eq!(c.board().serial.rx_pending(), 8);
    assert_eq!(c.commands().stats().accepted, 0);

    run_until(&mut c, 147);
    assert_eq!(c.board().serial.rx_pending(), 0);
    assert_eq!(c.commands().stats().accepted, 1);
}

#[test]
fn remote_timeout_still_fires_while_radio_reads_fail() {
    let mut c = controller(LinkMode::Remote);
    let forward = RemoteSample::from_words([512, 1024, 512, 512, 0, 0]);
    c.board_mut().radio.queue_sample(forward);

    run_until(&mut c, 33);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::new(1000, -1000)));

    c.board_mut().radio.fail_receive(true);
    run_until(&mut c, 110);
    assert_eq!(c.remote().status(), RemoteStatus::Lost);
    assert_eq!(c.remote().sample(), RemoteSample::NEUTRAL);
    let (_, poll) = c.table().find("remote_poll").unwrap();
    assert!(poll.stats().errors >= 1);

    run_until(&mut c, 132);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::STOP));

    run_until(&mut c, 5_000);
    assert_eq!(c.remote().status(), RemoteStatus::Lost);
    assert_eq!(c.board().wheels.last(), Some(WheelSetpoints::STOP));

    c.board_mut().radio.fail_receive(false);
    c.board_mut().radio.queue_sample(forward);
    run_until(&mut c, 5_050);
    assert_eq!(c.remote().status(), RemoteStatus::Active);
}
