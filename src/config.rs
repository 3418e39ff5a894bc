//! Fixed board map and timing constants
//!
//! The classroom robot ships with a fixed wiring plan; these constants describe
//! it. Lines outside the legal ranges below are preallocated (serial links,
//! bumper interrupts, on-board LEDs) and must never be reassigned by the
//! guarded operations.

/// Lowest digital line a student may drive as an output
pub const DIGITAL_OUTPUT_PIN_MIN: u8 = 4;
/// Highest digital line a student may drive as an output
pub const DIGITAL_OUTPUT_PIN_MAX: u8 = 12;

/// Lowest digital line a student may sample as an input
pub const DIGITAL_INPUT_PIN_MIN: u8 = 2;
/// Highest digital line a student may sample as an input
pub const DIGITAL_INPUT_PIN_MAX: u8 = 9;

/// Highest legal analog channel (channels are 0-based)
pub const ADC_CHANNEL_MAX: u8 = 5;

/// Red on-board LED, doubles as the fault blink indicator
pub const LED_RED: u8 = 10;
/// Yellow on-board LED
pub const LED_YELLOW: u8 = 11;
/// Green on-board LED
pub const LED_GREEN: u8 = 12;

/// Console (diagnostic terminal) serial RX/TX lines
pub const CONSOLE_PINS: [u8; 2] = [0, 1];
/// Bumper-switch external trigger lines
pub const BUMPER_PINS: [u8; 2] = [2, 3];
/// TX line of the dedicated serial link to the motor controller
pub const MOTOR_TX_PIN: u8 = 13;

/// Baud rate of the motor-controller serial link
pub const MOTOR_LINK_BAUD: u32 = 115_200;
/// Baud rate of the diagnostic console serial link
pub const CONSOLE_BAUD: u32 = 115_200;

/// Settling time before each motor frame, lets the controller finish the
/// previous command
pub const MOTOR_SETTLE_MS: u16 = 2;
/// Power-on-reset time for the motor controller at bring-up
pub const CONTROLLER_POR_MS: u16 = 5;
/// Quiet period after bring-up before the version banner is printed
pub const BRING_UP_SETTLE_MS: u16 = 1000;

/// Number of times one analog sample is accumulated per read
pub const ADC_ACCUMULATE_COUNT: u16 = 49;

/// Fault blink on-time per flash
pub const FAULT_BLINK_ON_MS: u16 = 150;
/// Fault blink off-time per flash
pub const FAULT_BLINK_OFF_MS: u16 = 240;
/// Pause between fault blink bursts
pub const FAULT_BLINK_PAUSE_MS: u16 = 1000;

/// Version banner printed on the console line at bring-up (set by build.rs)
pub const VERSION: &str = env!("BUMPERBOT_VERSION");
