#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! bumperbot - Guarded hardware-abstraction library for a two-motor classroom robot
//!
//! This library wraps a fixed robot board in a small set of guarded operations
//! (motor commands, digital I/O, analog reads, timed delay) so students never
//! touch pin registers or the motor-controller serial protocol directly. Every
//! public operation validates its parameters before touching hardware; an
//! invalid parameter drops the robot into a terminal blink-diagnostic state
//! identifying the offending operation.

// Platform abstraction layer (board trait + mock board for host tests)
pub mod platform;

// Guarded I/O libraries built on the board abstraction
pub mod libraries;

// Core systems (fault signaling, logging)
pub mod core;

// Fixed board map and timing constants
pub mod config;

// Student-facing robot facade
pub mod robot;

pub use crate::core::fault::Fault;
pub use platform::traits::{Board, Level, PinMode};
pub use robot::Robot;
