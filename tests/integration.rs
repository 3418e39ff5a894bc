//! End-to-end scenarios over the mock board
//!
//! Exercises the student-facing facade the way course code uses it: bring-up,
//! motor commands, digital I/O, analog reads, and the fault paths via the
//! checked `try_*` twins.

use bumperbot::config;
use bumperbot::core::fault;
use bumperbot::platform::mock::MockBoard;
use bumperbot::{Board, Fault, Level, PinMode, Robot};

fn fresh_robot() -> Robot<MockBoard> {
    let mut robot = Robot::new(MockBoard::new());
    robot.board_mut().clear_motor_tx_log();
    robot.board_mut().clear_write_log();
    robot.board_mut().clear_delays();
    robot
}

#[test]
fn bring_up_resets_motors_and_prints_banner() {
    let robot = Robot::new(MockBoard::new());
    let board = robot.board();

    assert_eq!(board.motor_tx_log(), [b's', b'r', b'f']);
    assert!(!board.triggers_masked());

    let mut banner = config::VERSION.as_bytes().to_vec();
    banner.extend_from_slice(b"\r\n");
    assert_eq!(board.console_tx_log(), banner);
}

#[test]
fn both_motors_forward_half_speed() {
    let mut robot = fresh_robot();

    // 'B' normalizes to 'b'; 50% maps to device value 130
    robot.motors(b'B', b'a', 50);

    assert_eq!(robot.board().motor_tx_log(), [b's', b'b', b'a', 130, b'f']);
}

#[test]
fn speed_only_change_keeps_direction() {
    let mut robot = fresh_robot();

    // Numeric motor 1, direction 'x' (hold), speed 0 (unchanged marker)
    robot.motors(1, b'x', 0);

    assert_eq!(robot.board().motor_tx_log(), [b's', b'1', b'x', 0, b'f']);
}

#[test]
fn boundary_speeds_map_to_device_scale() {
    let mut robot = fresh_robot();

    robot.motors(b'2', b'b', 25);
    robot.motors(b'2', b'b', 100);

    assert_eq!(
        robot.board().motor_tx_log(),
        [b's', b'2', b'b', 67, b'f', b's', b'2', b'b', 255, b'f']
    );
}

#[test]
fn invalid_direction_faults_without_transmission() {
    let mut robot = fresh_robot();

    assert_eq!(robot.try_motors(b'b', b'z', 50), Err(Fault::MotorCommand));
    assert!(robot.board().motor_tx_log().is_empty());
}

#[test]
fn dead_band_speed_faults() {
    let mut robot = fresh_robot();

    for speed in [1, 24] {
        assert_eq!(robot.try_motors(b'1', b'a', speed), Err(Fault::MotorCommand));
    }
    assert!(robot.board().motor_tx_log().is_empty());
}

#[test]
fn motor_frames_always_sent_under_mask() {
    let mut robot = fresh_robot();

    robot.motors(b'b', b'a', 50);
    robot.motors(2, b'o', 0);

    assert!(!robot.board().motor_tx_while_unmasked());
    assert!(!robot.board().triggers_masked());
}

#[test]
fn guarded_digital_io_roundtrip() {
    let mut robot = fresh_robot();

    robot.output_high(4);
    robot.output_low(12);
    assert_eq!(robot.board().pin_level(4), Level::High);
    assert_eq!(robot.board().pin_level(12), Level::Low);
    assert_eq!(robot.board().pin_mode(4), Some(PinMode::Output));

    robot.board_mut().set_input_level(9, Level::High);
    assert_eq!(robot.read_input(9), 1);
    assert_eq!(robot.board().pin_mode(9), Some(PinMode::Input));
}

#[test]
fn guarded_operations_reject_reserved_lines() {
    let mut robot = fresh_robot();

    // Motor serial TX line
    assert_eq!(robot.try_output_high(13), Err(Fault::OutputHigh));
    // Console serial lines
    assert_eq!(robot.try_output_low(0), Err(Fault::OutputLow));
    assert_eq!(robot.try_read_input(1), Err(Fault::InputRead));
    // Indicator LEDs are writable but not readable
    assert_eq!(robot.try_read_input(config::LED_RED), Err(Fault::InputRead));

    assert!(robot.board().write_log().is_empty());
}

#[test]
fn adc_read_accumulates_one_sample() {
    let mut robot = fresh_robot();
    robot.board_mut().set_adc_value(0, 1023);

    assert_eq!(robot.read_adc(0), 50127);
    assert_eq!(robot.board().adc_sample_count(0), 1);

    assert_eq!(robot.try_read_adc(6), Err(Fault::AdcRead));
}

#[test]
fn fault_entry_quiesces_and_blinks_the_code() {
    // Drive the fault machinery directly; halt() itself never returns, so
    // exercise its two halves the way it composes them.
    let mut board = MockBoard::new();
    board.unmask_triggers();

    fault::quiesce(&mut board);
    assert_eq!(board.motor_tx_log(), [b's', b'r', b'f']);
    assert!(board.triggers_masked());
    // The mask is asserted before the reset frame, so even a fault reached
    // from unmasked code never puts a motor byte on the wire unmasked
    assert!(!board.motor_tx_while_unmasked());

    board.clear_write_log();
    board.clear_delays();
    fault::blink_cycle(&mut board, Fault::MotorCommand);

    // Five flashes for a bad motor command, then the burst pause
    assert_eq!(board.write_log().len(), 10);
    assert_eq!(board.delays().len(), 11);
    assert_eq!(*board.delays().last().unwrap(), 1000);
}

#[test]
fn output_low_is_idempotent() {
    let mut robot = fresh_robot();

    robot.output_low(7);
    let once = (robot.board().pin_mode(7), robot.board().pin_level(7));

    robot.output_low(7);
    assert_eq!((robot.board().pin_mode(7), robot.board().pin_level(7)), once);
}
