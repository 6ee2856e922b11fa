//! Smoothswitch engine crate.
//!
//! Platform-agnostic primitives shared by the widget layer: geometry, pointer
//! input, frame timing and logger setup. Nothing here knows about switches.

pub mod coords;
pub mod input;
pub mod logging;
pub mod time;
