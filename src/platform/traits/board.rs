//! Board interface trait
//!
//! This module defines the primitive operations the robot board owes the
//! library: pin configuration, digital read/write, analog sampling, the two
//! serial TX lines, a millisecond delay, and bumper-trigger masking. The
//! guarded operation layer validates parameters; implementations of this trait
//! may assume every pin and channel they receive is legal.

/// Digital signal level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Ground
    Low,
    /// Supply voltage
    High,
}

impl Level {
    /// Level as the 0/1 value handed back to student code
    pub fn bit(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// `true` if the level is [`Level::High`]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Digital pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input (high impedance)
    Input,
    /// Output (push-pull)
    Output,
}

/// Board interface trait
///
/// Board implementations must provide these primitives for the guarded
/// operation layer.
///
/// # Safety Invariants
///
/// - Pin and channel numbers are pre-validated by the caller; implementations
///   need not range-check them.
/// - `delay_ms` must be callable from a bumper-trigger handler.
/// - `motor_tx` writes one byte on the dedicated motor-controller link
///   (115.2 kBd); callers serialize access by holding the trigger mask.
pub trait Board {
    /// Configure a digital pin as input or output
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode);

    /// Drive an output pin to the given level
    fn write_pin(&mut self, pin: u8, level: Level);

    /// Sample the level on an input pin
    fn read_pin(&mut self, pin: u8) -> Level;

    /// Take one raw sample from an analog channel (10-bit on the stock board)
    fn sample_adc(&mut self, channel: u8) -> u16;

    /// Transmit one byte on the motor-controller serial line
    fn motor_tx(&mut self, byte: u8);

    /// Transmit one byte on the diagnostic console serial line
    fn console_tx(&mut self, byte: u8);

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u16);

    /// Mask the external bumper triggers
    fn mask_triggers(&mut self);

    /// Unmask the external bumper triggers
    fn unmask_triggers(&mut self);
}

/// Run `f` with the bumper triggers masked, unmasking again on the way out.
///
/// Every guarded operation wraps its act phase in this so a trigger handler
/// can never observe a half-reconfigured pin or a partial motor frame. The
/// mask is restored on every exit path of `f`, early `Err` returns included;
/// only the fault state, which never returns, leaves it asserted.
pub fn with_triggers_masked<B, T, F>(board: &mut B, f: F) -> T
where
    B: Board + ?Sized,
    F: FnOnce(&mut B) -> T,
{
    board.mask_triggers();
    let result = f(board);
    board.unmask_triggers();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockBoard;

    #[test]
    fn test_level_bit() {
        assert_eq!(Level::Low.bit(), 0);
        assert_eq!(Level::High.bit(), 1);
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }

    #[test]
    fn test_with_triggers_masked_restores() {
        let mut board = MockBoard::new();
        board.unmask_triggers();

        with_triggers_masked(&mut board, |b| {
            assert!(b.triggers_masked());
        });
        assert!(!board.triggers_masked());
    }

    #[test]
    fn test_with_triggers_masked_restores_on_err() {
        let mut board = MockBoard::new();
        board.unmask_triggers();

        let result: Result<(), ()> = with_triggers_masked(&mut board, |_| Err(()));
        assert!(result.is_err());
        assert!(!board.triggers_masked());
    }
}
