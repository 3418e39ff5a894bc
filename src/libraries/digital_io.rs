//! Validated digital pin operations
//!
//! Configure-and-drive and configure-and-sense over the student-legal pin
//! ranges. Lines outside those ranges are preallocated (serial links, bumper
//! triggers, on-board LEDs) and are rejected before the board is touched.
//! The act phase runs with the bumper triggers masked so a trigger handler
//! never sees a pin mid-reconfiguration.

use crate::config;
use crate::core::fault::Fault;
use crate::platform::traits::{with_triggers_masked, Board, Level, PinMode};

/// Configure `pin` as an output and drive it high.
///
/// `pin` must lie in 4..=12; anything else is rejected with
/// `Fault::OutputHigh` and the board untouched.
pub fn output_high<B: Board>(board: &mut B, pin: u8) -> Result<(), Fault> {
    drive(board, pin, Level::High, Fault::OutputHigh)
}

/// Configure `pin` as an output and drive it low.
///
/// `pin` must lie in 4..=12; anything else is rejected with
/// `Fault::OutputLow` and the board untouched.
pub fn output_low<B: Board>(board: &mut B, pin: u8) -> Result<(), Fault> {
    drive(board, pin, Level::Low, Fault::OutputLow)
}

fn drive<B: Board>(board: &mut B, pin: u8, level: Level, fault: Fault) -> Result<(), Fault> {
    if pin < config::DIGITAL_OUTPUT_PIN_MIN || pin > config::DIGITAL_OUTPUT_PIN_MAX {
        return Err(fault);
    }
    with_triggers_masked(board, |b| {
        b.set_pin_mode(pin, PinMode::Output);
        b.write_pin(pin, level);
    });
    Ok(())
}

/// Configure `pin` as an input and sample its level.
///
/// `pin` must lie in 2..=9; anything else is rejected with
/// `Fault::InputRead` and the board untouched.
pub fn read_input<B: Board>(board: &mut B, pin: u8) -> Result<Level, Fault> {
    if pin < config::DIGITAL_INPUT_PIN_MIN || pin > config::DIGITAL_INPUT_PIN_MAX {
        return Err(Fault::InputRead);
    }
    let level = with_triggers_masked(board, |b| {
        b.set_pin_mode(pin, PinMode::Input);
        b.read_pin(pin)
    });
    Ok(level)
}
