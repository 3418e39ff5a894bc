//! Platform interface traits
//!
//! Trait definitions that board implementations must provide.

pub mod board;

pub use board::{with_triggers_masked, Board, Level, PinMode};
