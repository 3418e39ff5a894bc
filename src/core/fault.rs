//! Fault signaling
//!
//! The single error channel of the library. Every guarded operation that
//! detects an invalid parameter reports a [`Fault`] naming itself; the
//! student-facing facade converts that into [`halt`], a terminal diagnostic
//! state that silences the motors and blinks the red LED forever. The blink
//! count identifies the offending operation, so a student at the bench can
//! tell which call was bad without a terminal attached. Recovery is a power
//! cycle of the whole board.

use core::fmt;

use crate::config;
use crate::libraries::motor_link::{frame, MotorCommand};
use crate::log_error;
use crate::platform::traits::{Board, Level};

/// Invalid-parameter fault, tagged by the guarded operation that detected it
///
/// This is the library's only error type; there is no recoverable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// `read_adc` called with a channel outside 0..=5
    AdcRead,
    /// `read_input` called with a pin outside 2..=9
    InputRead,
    /// `output_high` called with a pin outside 4..=12
    OutputHigh,
    /// `output_low` called with a pin outside 4..=12
    OutputLow,
    /// `motors` called with a bad target, direction, or speed
    MotorCommand,
}

impl Fault {
    /// Number of red-LED flashes per burst in the terminal diagnostic
    pub fn blink_count(self) -> u8 {
        match self {
            Fault::AdcRead => 1,
            Fault::InputRead => 2,
            Fault::OutputHigh => 3,
            Fault::OutputLow => 4,
            Fault::MotorCommand => 5,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::AdcRead => write!(f, "invalid analog channel"),
            Fault::InputRead => write!(f, "invalid digital input pin"),
            Fault::OutputHigh => write!(f, "invalid digital output pin (high)"),
            Fault::OutputLow => write!(f, "invalid digital output pin (low)"),
            Fault::MotorCommand => write!(f, "invalid motor command parameter"),
        }
    }
}

/// Enter the terminal fault state. Never returns.
///
/// Masks the bumper triggers for good, silences the robot (reset-both motor
/// frame, all indicator LEDs off), then blinks the fault code forever.
pub fn halt<B: Board>(board: &mut B, fault: Fault) -> ! {
    log_error!("fault: blink code {}", fault.blink_count());
    quiesce(board);
    loop {
        blink_cycle(board, fault);
    }
}

/// Quiesce the robot on the way into the fault state: assert the trigger
/// mask, stop both motors, drive the indicator LEDs low.
///
/// The mask is asserted before the reset frame goes out. Guards reject bad
/// input before their masked act phase, so the facade reaches here unmasked;
/// masking first keeps the frame from interleaving with a trigger handler's
/// own motor traffic.
pub fn quiesce<B: Board>(board: &mut B) {
    board.mask_triggers();
    frame::send(board, &MotorCommand::reset());
    board.write_pin(config::LED_RED, Level::Low);
    board.write_pin(config::LED_YELLOW, Level::Low);
    board.write_pin(config::LED_GREEN, Level::Low);
}

/// One burst of the terminal diagnostic: `blink_count` flashes of the red
/// LED (on 150 ms, off 240 ms), then a 1000 ms pause.
///
/// [`halt`] loops this forever; it is public so the pattern can be verified
/// one cycle at a time.
pub fn blink_cycle<B: Board>(board: &mut B, fault: Fault) {
    for _ in 0..fault.blink_count() {
        board.write_pin(config::LED_RED, Level::High);
        board.delay_ms(config::FAULT_BLINK_ON_MS);
        board.write_pin(config::LED_RED, Level::Low);
        board.delay_ms(config::FAULT_BLINK_OFF_MS);
    }
    board.delay_ms(config::FAULT_BLINK_PAUSE_MS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockBoard;

    #[test]
    fn test_blink_counts() {
        assert_eq!(Fault::AdcRead.blink_count(), 1);
        assert_eq!(Fault::InputRead.blink_count(), 2);
        assert_eq!(Fault::OutputHigh.blink_count(), 3);
        assert_eq!(Fault::OutputLow.blink_count(), 4);
        assert_eq!(Fault::MotorCommand.blink_count(), 5);
    }

    #[test]
    fn test_quiesce_silences_robot() {
        let mut board = MockBoard::new();
        board.unmask_triggers();

        quiesce(&mut board);

        // Reset-both frame on the motor line, then every LED low
        assert_eq!(board.motor_tx_log(), [b's', b'r', b'f']);
        assert_eq!(board.pin_level(config::LED_RED), Level::Low);
        assert_eq!(board.pin_level(config::LED_YELLOW), Level::Low);
        assert_eq!(board.pin_level(config::LED_GREEN), Level::Low);
        assert!(board.triggers_masked());
    }

    #[test]
    fn test_quiesce_masks_before_reset_frame() {
        let mut board = MockBoard::new();
        // The facade reaches the fault path unmasked: guards reject bad
        // input before their masked act phase.
        board.unmask_triggers();

        quiesce(&mut board);

        assert!(!board.motor_tx_while_unmasked());
        assert!(board.triggers_masked());
    }

    #[test]
    fn test_blink_cycle_pattern() {
        let mut board = MockBoard::new();

        blink_cycle(&mut board, Fault::OutputHigh);

        // Three flashes: (red high, 150, red low, 240) x3, then 1000 pause
        let writes = board.write_log();
        assert_eq!(writes.len(), 6);
        for pair in writes.chunks(2) {
            assert_eq!(pair[0], (config::LED_RED, Level::High));
            assert_eq!(pair[1], (config::LED_RED, Level::Low));
        }
        assert_eq!(board.delays(), [150, 240, 150, 240, 150, 240, 1000]);
    }

    #[test]
    fn test_blink_cycle_single_flash() {
        let mut board = MockBoard::new();

        blink_cycle(&mut board, Fault::AdcRead);

        assert_eq!(board.write_log().len(), 2);
        assert_eq!(board.delays(), [150, 240, 1000]);
    }
}
