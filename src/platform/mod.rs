//! Platform abstraction layer
//!
//! This module isolates everything board-specific behind the [`Board`] trait.
//! The guarded I/O libraries are written against the trait only, so the same
//! code runs on the real robot and against the in-memory mock in host tests.

pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use traits::{with_triggers_masked, Board, Level, PinMode};
