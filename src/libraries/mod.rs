//! Guarded I/O libraries
//!
//! The validate-then-act operations the robot facade exposes to students,
//! written against the [`Board`] trait. Each operation range-checks its
//! parameters before touching the board and reports a [`Fault`] on violation
//! with the board untouched.
//!
//! [`Board`]: crate::platform::traits::Board
//! [`Fault`]: crate::core::fault::Fault

pub mod analog;
pub mod digital_io;
pub mod motor_link;
