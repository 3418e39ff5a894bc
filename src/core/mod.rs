//! Core systems
//!
//! Fault signaling and the logging facade.

pub mod fault;
pub mod logging;

pub use fault::Fault;
