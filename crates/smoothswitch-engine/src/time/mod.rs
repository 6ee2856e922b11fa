//! Time subsystem.
//!
//! Frame timing that drives animations without coupling them to a runtime.
//! Intended usage:
//! - one `FrameClock` per host loop
//! - call `tick()` once per presented frame, or `advance(dt)` for scripted hosts

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
