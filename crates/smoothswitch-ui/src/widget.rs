use smoothswitch_engine::coords::{Rect, Vec2};
use smoothswitch_engine::time::FrameTime;

use crate::constraints::Constraints;
use crate::event::{EventResult, HostRequests, UiEvent};
use crate::painter::Painter;

/// The contract between a widget and whatever hosts it.
///
/// Hosts call, in order per frame: `on_event` for each input event,
/// `on_frame` once, `take_requests`, then `measure`/`paint` as requested.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic; the parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }

    /// Advance time-based state. Returns `true` if anything visible changed.
    fn on_frame(&mut self, _time: &FrameTime) -> bool {
        false
    }

    /// Drain the requests accumulated since the last call.
    fn take_requests(&mut self) -> HostRequests {
        HostRequests::default()
    }
}
