//! Student-facing robot facade
//!
//! [`Robot`] owns the board and exposes the guarded operations in the shape
//! students use them: call with raw values, get an answer back, and never
//! worry about error handling — an invalid parameter halts the robot in the
//! blink-diagnostic state instead of returning. Each operation also has a
//! checked `try_*` twin that reports the [`Fault`] as an `Err` for host-side
//! code and tests.

use crate::config;
use crate::core::fault::{self, Fault};
use crate::libraries::motor_link::{frame, MotorCommand};
use crate::libraries::{analog, digital_io};
use crate::log_info;
use crate::platform::traits::{with_triggers_masked, Board, Level, PinMode};

/// The robot: one board plus the guarded operation set
///
/// # Example
///
/// ```
/// use bumperbot::platform::mock::MockBoard;
/// use bumperbot::Robot;
///
/// let mut robot = Robot::new(MockBoard::new());
/// robot.motors(b'b', b'a', 50); // both motors forward at 50%
/// robot.pause(500);
/// robot.motors(b'b', b'o', 0); // both motors off
/// ```
pub struct Robot<B: Board> {
    board: B,
}

impl<B: Board> Robot<B> {
    /// Bring up the robot and return the ready facade.
    ///
    /// One-time hardware bring-up: wait out the motor controller's power-on
    /// reset, force both motors off (they may still be running from before a
    /// warm restart), darken the indicator LEDs, enable the bumper triggers,
    /// then settle and print the version banner on the console line.
    pub fn new(board: B) -> Self {
        let mut robot = Robot { board };
        robot.bring_up();
        robot
    }

    fn bring_up(&mut self) {
        // Triggers are still masked from hardware reset at this point.
        self.board.delay_ms(config::CONTROLLER_POR_MS);
        frame::send(&mut self.board, &MotorCommand::reset());
        for led in [config::LED_RED, config::LED_YELLOW, config::LED_GREEN] {
            self.board.set_pin_mode(led, PinMode::Output);
            self.board.write_pin(led, Level::Low);
        }
        self.board.unmask_triggers();
        self.board.delay_ms(config::BRING_UP_SETTLE_MS);
        self.print_version();
        log_info!("bring-up complete");
    }

    /// Command one or both motors.
    ///
    /// `motor` is 1, 2, '1', '2' or 'b' (both); `direction` is 'a', 'b',
    /// 'o' (off) or 'x' (unchanged); `speed` is 0 (unchanged) or 25..=100
    /// percent. Letters are case-insensitive. Any other value halts the
    /// robot with blink code 5.
    pub fn motors(&mut self, motor: u8, direction: u8, speed: u8) {
        if let Err(fault) = self.try_motors(motor, direction, speed) {
            fault::halt(&mut self.board, fault);
        }
    }

    /// Checked variant of [`motors`](Self::motors); nothing is transmitted
    /// on `Err`.
    pub fn try_motors(&mut self, motor: u8, direction: u8, speed: u8) -> Result<(), Fault> {
        // Validation and transmission share one mask window so a trigger
        // handler's own motor traffic cannot interleave with this frame.
        with_triggers_masked(&mut self.board, |board| {
            let cmd = MotorCommand::from_raw(motor, direction, speed)?;
            frame::send(board, &cmd);
            Ok(())
        })
    }

    /// Configure `pin` (4..=12) as an output and drive it high.
    ///
    /// An out-of-range pin halts the robot with blink code 3.
    pub fn output_high(&mut self, pin: u8) {
        if let Err(fault) = digital_io::output_high(&mut self.board, pin) {
            fault::halt(&mut self.board, fault);
        }
    }

    /// Checked variant of [`output_high`](Self::output_high)
    pub fn try_output_high(&mut self, pin: u8) -> Result<(), Fault> {
        digital_io::output_high(&mut self.board, pin)
    }

    /// Configure `pin` (4..=12) as an output and drive it low.
    ///
    /// An out-of-range pin halts the robot with blink code 4.
    pub fn output_low(&mut self, pin: u8) {
        if let Err(fault) = digital_io::output_low(&mut self.board, pin) {
            fault::halt(&mut self.board, fault);
        }
    }

    /// Checked variant of [`output_low`](Self::output_low)
    pub fn try_output_low(&mut self, pin: u8) -> Result<(), Fault> {
        digital_io::output_low(&mut self.board, pin)
    }

    /// Configure `pin` (2..=9) as an input and return its level as 0 or 1.
    ///
    /// An out-of-range pin halts the robot with blink code 2.
    pub fn read_input(&mut self, pin: u8) -> u8 {
        match digital_io::read_input(&mut self.board, pin) {
            Ok(level) => level.bit(),
            Err(fault) => fault::halt(&mut self.board, fault),
        }
    }

    /// Checked variant of [`read_input`](Self::read_input)
    pub fn try_read_input(&mut self, pin: u8) -> Result<Level, Fault> {
        digital_io::read_input(&mut self.board, pin)
    }

    /// Read analog `channel` (0..=5); returns one sample accumulated 49
    /// times, about 0..=50127 over the 0-5 V input range.
    ///
    /// An out-of-range channel halts the robot with blink code 1.
    pub fn read_adc(&mut self, channel: u8) -> u16 {
        match analog::read(&mut self.board, channel) {
            Ok(value) => value,
            Err(fault) => fault::halt(&mut self.board, fault),
        }
    }

    /// Checked variant of [`read_adc`](Self::read_adc)
    pub fn try_read_adc(&mut self, channel: u8) -> Result<u16, Fault> {
        analog::read(&mut self.board, channel)
    }

    /// Delay for `ms` milliseconds (1..=65535).
    ///
    /// Safe to call from a bumper-trigger handler; does not mask triggers.
    pub fn pause(&mut self, ms: u16) {
        self.board.delay_ms(ms);
    }

    /// Print the library version banner on the diagnostic console line
    pub fn print_version(&mut self) {
        for &byte in config::VERSION.as_bytes() {
            self.board.console_tx(byte);
        }
        self.board.console_tx(b'\r');
        self.board.console_tx(b'\n');
    }

    /// Borrow the underlying board
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Mutably borrow the underlying board
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }
}
