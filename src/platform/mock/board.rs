//! Mock board implementation for testing

use crate::platform::traits::{Board, Level, PinMode};
use std::vec::Vec;

/// Number of digital lines on the stock board (0..=13)
const NUM_PINS: usize = 14;
/// Number of analog channels on the stock board
const NUM_ADC_CHANNELS: usize = 6;

/// Mock board implementation
///
/// Records every primitive operation for test verification: per-pin modes and
/// driven levels, an ordered write log, both serial TX streams, delays, and
/// the bumper-trigger mask state. Input levels and analog samples are
/// injectable. The board starts with triggers masked, matching the hardware
/// reset state before bring-up enables them.
///
/// # Example
///
/// ```
/// use bumperbot::platform::mock::MockBoard;
/// use bumperbot::platform::traits::{Board, Level};
///
/// let mut board = MockBoard::new();
/// board.set_input_level(5, Level::High);
/// assert_eq!(board.read_pin(5), Level::High);
///
/// board.motor_tx(b's');
/// assert_eq!(board.motor_tx_log(), [b's']);
/// ```
#[derive(Debug)]
pub struct MockBoard {
    pin_modes: [Option<PinMode>; NUM_PINS],
    pin_levels: [Level; NUM_PINS],
    input_levels: [Level; NUM_PINS],
    adc_values: [u16; NUM_ADC_CHANNELS],
    adc_sample_counts: [u32; NUM_ADC_CHANNELS],
    motor_tx: Vec<u8>,
    console_tx: Vec<u8>,
    write_log: Vec<(u8, Level)>,
    delays: Vec<u16>,
    masked: bool,
    motor_tx_while_unmasked: bool,
}

impl MockBoard {
    /// Create a new mock board in the hardware reset state (triggers masked)
    pub fn new() -> Self {
        Self {
            pin_modes: [None; NUM_PINS],
            pin_levels: [Level::Low; NUM_PINS],
            input_levels: [Level::Low; NUM_PINS],
            adc_values: [0; NUM_ADC_CHANNELS],
            adc_sample_counts: [0; NUM_ADC_CHANNELS],
            motor_tx: Vec::new(),
            console_tx: Vec::new(),
            write_log: Vec::new(),
            delays: Vec::new(),
            masked: true,
            motor_tx_while_unmasked: false,
        }
    }

    /// Inject the level a subsequent `read_pin` will observe
    pub fn set_input_level(&mut self, pin: u8, level: Level) {
        self.input_levels[usize::from(pin)] = level;
    }

    /// Inject the raw sample a subsequent `sample_adc` will return
    pub fn set_adc_value(&mut self, channel: u8, value: u16) {
        self.adc_values[usize::from(channel)] = value;
    }

    /// Configured mode of a pin, `None` if never configured
    pub fn pin_mode(&self, pin: u8) -> Option<PinMode> {
        self.pin_modes[usize::from(pin)]
    }

    /// Last level driven on a pin
    pub fn pin_level(&self, pin: u8) -> Level {
        self.pin_levels[usize::from(pin)]
    }

    /// Number of physical samples taken on an analog channel
    pub fn adc_sample_count(&self, channel: u8) -> u32 {
        self.adc_sample_counts[usize::from(channel)]
    }

    /// Bytes transmitted on the motor-controller line (for test verification)
    pub fn motor_tx_log(&self) -> Vec<u8> {
        self.motor_tx.clone()
    }

    /// Clear the motor-controller TX log
    pub fn clear_motor_tx_log(&mut self) {
        self.motor_tx.clear();
    }

    /// Bytes transmitted on the console line (for test verification)
    pub fn console_tx_log(&self) -> Vec<u8> {
        self.console_tx.clone()
    }

    /// Ordered log of `(pin, level)` writes
    pub fn write_log(&self) -> Vec<(u8, Level)> {
        self.write_log.clone()
    }

    /// Clear the pin write log
    pub fn clear_write_log(&mut self) {
        self.write_log.clear();
    }

    /// Requested delays, in call order
    pub fn delays(&self) -> Vec<u16> {
        self.delays.clone()
    }

    /// Clear the delay log
    pub fn clear_delays(&mut self) {
        self.delays.clear();
    }

    /// Current bumper-trigger mask state
    pub fn triggers_masked(&self) -> bool {
        self.masked
    }

    /// `true` if any motor byte was ever transmitted while triggers were
    /// unmasked (a frame-interleaving hazard)
    pub fn motor_tx_while_unmasked(&self) -> bool {
        self.motor_tx_while_unmasked
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for MockBoard {
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) {
        self.pin_modes[usize::from(pin)] = Some(mode);
    }

    fn write_pin(&mut self, pin: u8, level: Level) {
        self.pin_levels[usize::from(pin)] = level;
        self.write_log.push((pin, level));
    }

    fn read_pin(&mut self, pin: u8) -> Level {
        self.input_levels[usize::from(pin)]
    }

    fn sample_adc(&mut self, channel: u8) -> u16 {
        self.adc_sample_counts[usize::from(channel)] += 1;
        self.adc_values[usize::from(channel)]
    }

    fn motor_tx(&mut self, byte: u8) {
        if !self.masked {
            self.motor_tx_while_unmasked = true;
        }
        self.motor_tx.push(byte);
    }

    fn console_tx(&mut self, byte: u8) {
        self.console_tx.push(byte);
    }

    fn delay_ms(&mut self, ms: u16) {
        self.delays.push(ms);
    }

    fn mask_triggers(&mut self) {
        self.masked = true;
    }

    fn unmask_triggers(&mut self) {
        self.masked = false;
    }
}
