//! Mock platform implementation for testing
//!
//! This module provides an in-memory implementation of the [`Board`] trait so
//! the guarded operations can be unit tested on the host without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! [`Board`]: crate::platform::traits::Board

#![cfg(any(test, feature = "mock"))]

mod board;

pub use board::MockBoard;
