//! Smoothswitch UI: a toggle switch whose thumb can be dragged and settles
//! smoothly onto the nearer edge.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use smoothswitch_ui::prelude::*;
//!
//! let mut resources = Resources::new();
//! resources.insert(TRACK, Drawable::load("track.png")?);
//! resources.insert(THUMB, Drawable::load("thumb.svg")?);
//!
//! let switch = SmoothSwitch::from_resources(&resources, TRACK, THUMB)?
//!     .gravity(Gravity::CenterVertical)
//!     .on_change(|on| println!("switch is now {on}"));
//!
//! let mut scene = UiScene::new(switch, Rect::new(0.0, 0.0, 320.0, 48.0));
//!
//! // Per platform event:
//! scene.dispatch(&input_event);
//! // Per frame:
//! let draw_list = scene.frame(&clock.tick());
//! ```
//!
//! # Layers
//!
//! - [`switch`] holds the position state machine and knows nothing about
//!   drawing. Embed [`switch::SwitchController`] directly to drive a custom
//!   view.
//! - [`widgets::smooth_switch`] wraps the controller with assets, layout and
//!   painting behind the [`Widget`](widget::Widget) trait.
//! - [`scene`] is a small host that feeds engine input to one root widget.

pub mod constraints;
pub mod drawable;
pub mod event;
pub mod painter;
pub mod scene;
pub mod switch;
pub mod widget;
pub mod widgets;

/// Everything needed to host or extend the switch.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::drawable::{AssetError, Drawable, DrawableState, ResourceId, Resources};
    pub use crate::event::{EventResult, HostRequests, UiEvent};
    pub use crate::painter::{DrawItem, DrawList, Painter};
    pub use crate::scene::UiScene;
    pub use crate::switch::{Checkable, CompoundButton, Interpolator, Phase, SwitchConfig, SwitchController};
    pub use crate::widget::Widget;
    pub use crate::widgets::smooth_switch::{Gravity, SmoothSwitch};

    // Re-export the engine primitives everyone needs.
    pub use smoothswitch_engine::coords::{Rect, Vec2};
    pub use smoothswitch_engine::input::InputEvent;
    pub use smoothswitch_engine::time::{FrameClock, FrameTime};
}
