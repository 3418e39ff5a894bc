//! Motor command parsing and validation
//!
//! The motor controller accepts forgiving student input: a target that may be
//! the number 1/2 or the letter '1'/'2'/'b' in either case, a letter-coded
//! direction, and a percentage speed. This module parses those raw values
//! into canonical types before any board or link I/O happens, so a bad call
//! never leaves the controller mid-frame. Frame encoding and transmission
//! live in [`frame`].

pub mod frame;

use crate::core::fault::Fault;

/// Which motor(s) a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorTarget {
    /// Motor 1
    One,
    /// Motor 2
    Two,
    /// Both motors
    Both,
    /// Reset both motors (off, full speed); internal use only
    Reset,
}

impl MotorTarget {
    /// Parse a raw student-supplied target byte.
    ///
    /// Accepts the numbers 1 and 2 or the letters '1', '2', 'b' in either
    /// case. `Reset` is never parseable from student input; it is constructed
    /// internally by bring-up and fault signaling.
    pub fn parse(raw: u8) -> Option<Self> {
        match raw.to_ascii_lowercase() {
            1 | b'1' => Some(MotorTarget::One),
            2 | b'2' => Some(MotorTarget::Two),
            b'b' => Some(MotorTarget::Both),
            _ => None,
        }
    }

    /// Byte placed in the target slot of a motor frame
    pub fn wire_byte(self) -> u8 {
        match self {
            MotorTarget::One => b'1',
            MotorTarget::Two => b'2',
            MotorTarget::Both => b'b',
            MotorTarget::Reset => b'r',
        }
    }
}

/// What the addressed motor(s) should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDirection {
    /// Spin in the 'a' direction (depends on wiring)
    Forward,
    /// Spin in the 'b' direction (depends on wiring)
    Reverse,
    /// Motor off
    Off,
    /// Keep the current on/off/direction state (speed-only change)
    Hold,
}

impl MotorDirection {
    /// Parse a raw direction byte ('a', 'b', 'o', 'x', either case)
    pub fn parse(raw: u8) -> Option<Self> {
        match raw.to_ascii_lowercase() {
            b'a' => Some(MotorDirection::Forward),
            b'b' => Some(MotorDirection::Reverse),
            b'o' => Some(MotorDirection::Off),
            b'x' => Some(MotorDirection::Hold),
            _ => None,
        }
    }

    /// Byte placed in the direction slot of a motor frame
    pub fn wire_byte(self) -> u8 {
        match self {
            MotorDirection::Forward => b'a',
            MotorDirection::Reverse => b'b',
            MotorDirection::Off => b'o',
            MotorDirection::Hold => b'x',
        }
    }
}

/// Validated speed percentage
///
/// Legal raw values are 0 ("leave the speed unchanged") or 25..=100 (% of
/// full speed). 1..=24 commands too little drive to move the robot and is
/// rejected rather than silently stalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedPercent(u8);

impl SpeedPercent {
    /// Parse a raw percentage; rejects 1..=24 and anything above 100
    pub fn parse(raw: u8) -> Option<Self> {
        match raw {
            0 | 25..=100 => Some(SpeedPercent(raw)),
            _ => None,
        }
    }

    /// The raw percentage value
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Convert to the 8-bit value the motor controller expects.
    ///
    /// Zero stays zero (the "unchanged" marker). A non-zero percentage maps
    /// to roughly 2.5x + 5 using shift arithmetic, truncating on the halving:
    /// 25 -> 67, 50 -> 130, 100 -> 255.
    pub fn device_scale(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (self.0 << 1) + (self.0 >> 1) + 5
        }
    }
}

/// A fully validated motor command, ready for the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorCommand {
    /// Canonical target
    pub target: MotorTarget,
    /// Canonical direction
    pub direction: MotorDirection,
    /// Device-scale speed byte (0 = leave unchanged)
    pub speed: u8,
}

impl MotorCommand {
    /// Parse and validate raw student input.
    ///
    /// Checks target, then speed, then direction; any violation is
    /// `Fault::MotorCommand`. The speed is converted to device scale here so
    /// the transport deals only in wire values.
    pub fn from_raw(motor: u8, direction: u8, speed: u8) -> Result<Self, Fault> {
        let target = MotorTarget::parse(motor).ok_or(Fault::MotorCommand)?;
        let speed = SpeedPercent::parse(speed).ok_or(Fault::MotorCommand)?;
        let direction = MotorDirection::parse(direction).ok_or(Fault::MotorCommand)?;
        Ok(MotorCommand {
            target,
            direction,
            speed: speed.device_scale(),
        })
    }

    /// The reset-both command sent at bring-up and on fault entry
    pub fn reset() -> Self {
        MotorCommand {
            target: MotorTarget::Reset,
            direction: MotorDirection::Hold,
            speed: 0,
        }
    }
}
