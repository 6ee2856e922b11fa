//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Hosts translate platform events into `InputEvent`s (see [`platform`]).

pub mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchEvent,
    TouchPhase,
};
