//! Motor frame encoding and transmission
//!
//! Wire format on the dedicated motor-controller serial line (115.2 kBd,
//! byte-oriented, no acknowledgement, no checksum):
//!
//! ```text
//! 's' target 'f'                      reset-both (3 bytes)
//! 's' target direction speed 'f'     everything else (5 bytes)
//! ```
//!
//! Transmission is fire-and-forget; there is no read-back and no retry. The
//! caller holds the bumper-trigger mask for the whole send so frames from a
//! trigger handler cannot interleave.

use heapless::Vec;

use crate::config;
use crate::libraries::motor_link::{MotorCommand, MotorTarget};
use crate::log_debug;
use crate::platform::traits::Board;

/// Start-of-frame byte
pub const FRAME_START: u8 = b's';
/// End-of-frame byte
pub const FRAME_END: u8 = b'f';
/// Longest frame the protocol produces
pub const MAX_FRAME_LEN: usize = 5;

/// Encode a validated command into its wire bytes.
///
/// Reset-both frames carry no direction or speed; the controller stops both
/// motors as soon as it sees the target byte.
pub fn encode(cmd: &MotorCommand) -> Vec<u8, MAX_FRAME_LEN> {
    let mut bytes = Vec::new();
    let _ = bytes.push(FRAME_START);
    let _ = bytes.push(cmd.target.wire_byte());
    if cmd.target == MotorTarget::Reset {
        let _ = bytes.push(FRAME_END);
        return bytes;
    }
    let _ = bytes.push(cmd.direction.wire_byte());
    let _ = bytes.push(cmd.speed);
    let _ = bytes.push(FRAME_END);
    bytes
}

/// Transmit one command frame on the motor-controller line.
///
/// Waits the fixed settling interval first so the controller has finished
/// processing the previous frame, then writes the bytes one at a time.
/// Callers must hold the bumper-trigger mask for the duration.
pub fn send<B: Board + ?Sized>(board: &mut B, cmd: &MotorCommand) {
    board.delay_ms(config::MOTOR_SETTLE_MS);
    let bytes = encode(cmd);
    for &byte in &bytes {
        board.motor_tx(byte);
    }
    log_debug!("motor frame sent: {} bytes", bytes.len());
}
