use smoothswitch_engine::coords::{Rect, Vec2};
use smoothswitch_engine::time::FrameTime;

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::drawable::{AssetError, Drawable, DrawableState, ResourceId, Resources};
use crate::event::{EventResult, HostRequests, UiEvent};
use crate::painter::Painter;
use crate::switch::{CompoundButton, GestureDetector, SwitchConfig, SwitchController};
use crate::widget::Widget;

/// Vertical placement of the switch inside a taller widget rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    #[default]
    Top,
    CenterVertical,
    Bottom,
}

/// An on/off switch whose thumb can be dragged along the track and glides
/// to the nearer edge on release. A tap toggles it.
///
/// Both assets are required up front, so a switch can never exist without
/// something to measure and draw.
///
/// # Example
/// ```rust,ignore
/// SmoothSwitch::new(track, thumb)
///     .checked(true)
///     .gravity(Gravity::CenterVertical)
///     .on_change(|v| println!("switch: {v}"))
/// ```
pub struct SmoothSwitch {
    controller: SwitchController,
    gestures: GestureDetector,
    track: Drawable,
    thumb: Drawable,
    padding: Edges,
    gravity: Gravity,
    pressed: bool,
    requests: HostRequests,
}

impl SmoothSwitch {
    pub fn new(track: Drawable, thumb: Drawable) -> Self {
        let config = SwitchConfig::default();
        let controller = SwitchController::new(CompoundButton::default(), track.width(), thumb.width())
            .with_config(config);
        Self {
            controller,
            gestures: GestureDetector::new(config.touch_slop, config.long_press_timeout),
            track,
            thumb,
            padding: Edges::default(),
            gravity: Gravity::default(),
            pressed: false,
            requests: HostRequests::default(),
        }
    }

    /// Builds a switch from registered assets, failing if either id is unknown.
    pub fn from_resources(
        resources: &Resources,
        track: ResourceId,
        thumb: ResourceId,
    ) -> Result<Self, AssetError> {
        Ok(Self::new(resources.drawable(track)?, resources.drawable(thumb)?))
    }

    /// Initial state. Call before [`on_change`](Self::on_change), or the
    /// listener sees it.
    pub fn checked(mut self, v: bool) -> Self { self.controller.set_checked(v); self }
    pub fn enabled(mut self, v: bool) -> Self { self.set_enabled(v); self }
    pub fn padding(mut self, v: Edges) -> Self { self.padding = v; self }
    pub fn gravity(mut self, v: Gravity) -> Self { self.gravity = v; self }
    pub fn config(mut self, v: SwitchConfig) -> Self {
        self.controller.set_config(v);
        self.gestures = GestureDetector::new(v.touch_slop, v.long_press_timeout);
        self
    }
    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.controller.button_mut().set_on_checked_change(f);
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    pub fn is_checked(&self) -> bool {
        self.controller.is_checked()
    }

    /// Programmatic change: jumps to the edge without animating.
    pub fn set_checked(&mut self, v: bool) {
        self.controller.set_checked(v);
    }

    pub fn is_enabled(&self) -> bool {
        self.controller.is_enabled()
    }

    /// Disabling mid-gesture drops the gesture and snaps back.
    pub fn set_enabled(&mut self, v: bool) {
        if self.controller.is_enabled() == v {
            return;
        }
        self.controller.button_mut().set_enabled(v);
        if !v {
            self.gestures.on_event(&UiEvent::PointerCancel);
            self.controller.abandon_gesture();
            self.pressed = false;
        }
        self.requests.redraw = true;
    }

    /// Thumb offset from the track's left edge, in pixels.
    pub fn thumb_position(&self) -> i32 {
        self.controller.position()
    }

    pub fn controller(&self) -> &SwitchController {
        &self.controller
    }

    /// State the track and thumb are drawn in.
    pub fn drawable_state(&self) -> DrawableState {
        DrawableState {
            enabled: self.controller.is_enabled(),
            pressed: self.pressed,
            checked: self.controller.is_checked(),
        }
    }

    // ── assets ────────────────────────────────────────────────────────────

    pub fn track_drawable(&self) -> &Drawable {
        &self.track
    }

    pub fn thumb_drawable(&self) -> &Drawable {
        &self.thumb
    }

    pub fn set_track_drawable(&mut self, track: Drawable) {
        self.track = track;
        self.assets_changed();
    }

    pub fn set_track_resource(&mut self, resources: &Resources, id: ResourceId) -> Result<(), AssetError> {
        self.set_track_drawable(resources.drawable(id)?);
        Ok(())
    }

    pub fn set_thumb_drawable(&mut self, thumb: Drawable) {
        self.thumb = thumb;
        self.assets_changed();
    }

    pub fn set_thumb_resource(&mut self, resources: &Resources, id: ResourceId) -> Result<(), AssetError> {
        self.set_thumb_drawable(resources.drawable(id)?);
        Ok(())
    }

    fn assets_changed(&mut self) {
        self.controller.set_extents(self.track.width(), self.thumb.width());
        self.requests.layout = true;
        self.requests.redraw = true;
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Where the track sits inside the widget rect `rect`.
    ///
    /// The track keeps its intrinsic width and the taller asset's height
    /// (shrunk if the content box is smaller), starts at the left padding,
    /// and is placed vertically by gravity.
    ///
    /// The track is not stretched to fill a wider content box; extra width
    /// stays empty to the right.
    pub fn switch_bounds(&self, rect: Rect) -> Rect {
        let content = inset_rect(rect, self.padding);
        let w = (self.track.width() as f32).min(content.size.x);
        let h = (self.track.height().max(self.thumb.height()) as f32).min(content.size.y);
        let top = match self.gravity {
            Gravity::Top => content.top(),
            Gravity::CenterVertical => content.top() + ((content.size.y - h) / 2.0).floor(),
            Gravity::Bottom => content.bottom() - h,
        };
        Rect::new(content.left(), top, w, h)
    }

    /// Where the thumb sits inside the widget rect `rect`.
    pub fn thumb_bounds(&self, rect: Rect) -> Rect {
        let sw = self.switch_bounds(rect);
        Rect::new(
            sw.left() + self.controller.position() as f32,
            sw.top(),
            self.thumb.width() as f32,
            sw.size.y,
        )
    }

    fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.requests.redraw = true;
        }
    }
}

impl Widget for SmoothSwitch {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let desired = Vec2::new(
            self.track.width() as f32 + self.padding.h(),
            self.track.height().max(self.thumb.height()) as f32 + self.padding.v(),
        );
        let resolved = constraints.resolve(desired);
        if resolved.is_too_small() {
            log::debug!("switch: wanted {desired:?}, granted {:?}", resolved.size);
        }
        resolved.size
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let state = self.drawable_state();
        painter.draw_drawable(&self.track, self.switch_bounds(rect), state);
        painter.draw_drawable(&self.thumb, self.thumb_bounds(rect), state);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        if !self.controller.is_enabled() {
            return EventResult::Ignored;
        }
        let local_x = |pos: Vec2| pos.x - rect.origin.x;

        match *event {
            UiEvent::PointerDown { pos } => {
                if !rect.contains(pos) {
                    return EventResult::Ignored;
                }
                self.gestures.on_event(event);
                self.set_pressed(true);
                self.controller.handle_pointer_down(local_x(pos))
            }
            // Once down, the switch owns the gesture even outside its rect.
            UiEvent::PointerMove { pos } => {
                if !self.controller.is_gesture_active() {
                    return EventResult::Ignored;
                }
                self.gestures.on_event(event);
                self.controller.handle_pointer_move(local_x(pos))
            }
            UiEvent::PointerUp { pos } => {
                if !self.controller.is_gesture_active() {
                    return EventResult::Ignored;
                }
                if self.gestures.on_event(event) {
                    self.controller.handle_single_tap();
                }
                self.set_pressed(false);
                self.controller.handle_pointer_up(local_x(pos))
            }
            UiEvent::PointerCancel => {
                if !self.controller.is_gesture_active() {
                    return EventResult::Ignored;
                }
                self.gestures.on_event(event);
                self.set_pressed(false);
                self.controller.handle_pointer_cancel()
            }
        }
    }

    fn on_frame(&mut self, time: &FrameTime) -> bool {
        self.gestures.advance(time.dt);
        self.controller.advance(time.dt)
    }

    fn take_requests(&mut self) -> HostRequests {
        let mut requests = std::mem::take(&mut self.requests);
        requests.merge(self.controller.take_requests());
        requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::DrawList;
    use crate::switch::Phase;
    use smoothswitch_engine::time::FrameClock;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const TRACK: ResourceId = ResourceId(1);
    const THUMB: ResourceId = ResourceId(2);

    fn track(w: i32) -> Drawable { Drawable::solid("track", w, 30, [40, 40, 60, 255]).unwrap() }
    fn thumb(w: i32) -> Drawable { Drawable::solid("thumb", w, 30, [255, 255, 255, 255]).unwrap() }

    /// 100x30 track, 20x30 thumb, laid out at (10, 10).
    fn rect() -> Rect { Rect::new(10.0, 10.0, 100.0, 30.0) }

    fn at(x: f32) -> Vec2 { Vec2::new(x, 20.0) }

    fn run_frames(sw: &mut SmoothSwitch, n: usize) {
        let mut clock = FrameClock::new();
        for _ in 0..n {
            sw.on_frame(&clock.advance(Duration::from_millis(16)));
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_resources_requires_both_assets() {
        let mut res = Resources::new();
        res.insert(TRACK, track(100));
        let err = SmoothSwitch::from_resources(&res, TRACK, THUMB).err().unwrap();
        assert!(matches!(err, AssetError::UnknownResource(THUMB)));

        res.insert(THUMB, thumb(20));
        let sw = SmoothSwitch::from_resources(&res, TRACK, THUMB).unwrap();
        assert_eq!(sw.controller().max_position(), 80);
    }

    // ── measure / layout ──────────────────────────────────────────────────

    #[test]
    fn measure_adds_padding_to_intrinsic_size() {
        let sw = SmoothSwitch::new(track(100), Drawable::solid("thumb", 20, 36, [0; 4]).unwrap())
            .padding(Edges { top: 2.0, bottom: 4.0, left: 5.0, right: 7.0 });
        assert_eq!(sw.measure(Constraints::unbounded()), Vec2::new(112.0, 42.0));
        assert_eq!(sw.measure(Constraints::loose(Vec2::new(80.0, 100.0))), Vec2::new(80.0, 42.0));
        assert_eq!(
            sw.measure(Constraints::tight(Vec2::new(200.0, 50.0))),
            Vec2::new(200.0, 50.0)
        );
    }

    #[test]
    fn gravity_places_switch_vertically() {
        let tall = Rect::new(0.0, 0.0, 120.0, 70.0);
        let sw = SmoothSwitch::new(track(100), thumb(20)).padding(Edges::all(5.0));
        assert_eq!(sw.switch_bounds(tall), Rect::new(5.0, 5.0, 100.0, 30.0));

        let sw = sw.gravity(Gravity::CenterVertical);
        assert_eq!(sw.switch_bounds(tall), Rect::new(5.0, 20.0, 100.0, 30.0));

        let sw = sw.gravity(Gravity::Bottom);
        assert_eq!(sw.switch_bounds(tall), Rect::new(5.0, 35.0, 100.0, 30.0));
    }

    #[test]
    fn paint_draws_track_then_thumb_at_position() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20));
        sw.on_event(&UiEvent::PointerDown { pos: at(20.0) }, rect());
        sw.on_event(&UiEvent::PointerMove { pos: at(55.0) }, rect());

        let mut list = DrawList::new();
        sw.paint(&mut Painter::new(&mut list), rect());

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].drawable.label(), "track");
        assert_eq!(items[0].bounds, rect());
        assert_eq!(items[1].drawable.label(), "thumb");
        assert_eq!(items[1].bounds, Rect::new(45.0, 10.0, 20.0, 30.0));
        assert!(items[1].z > items[0].z);
        assert!(items[1].state.pressed);
    }

    // ── gestures ──────────────────────────────────────────────────────────

    #[test]
    fn tap_toggles_after_animation() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let mut sw = SmoothSwitch::new(track(100), thumb(20)).on_change(move |v| sink.borrow_mut().push(v));

        assert!(sw.on_event(&UiEvent::PointerDown { pos: at(30.0) }, rect()).is_consumed());
        assert!(sw.on_event(&UiEvent::PointerUp { pos: at(31.0) }, rect()).is_consumed());
        assert_eq!(sw.controller().phase(), Phase::Settling);
        assert!(!sw.is_checked());

        run_frames(&mut sw, 20);
        assert!(sw.is_checked());
        assert_eq!(sw.thumb_position(), 80);
        assert_eq!(*changes.borrow(), vec![true]);
        assert!(!sw.drawable_state().pressed);
        assert!(sw.drawable_state().checked);
    }

    #[test]
    fn long_still_press_does_not_toggle() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let mut sw = SmoothSwitch::new(track(100), thumb(20)).on_change(move |v| sink.borrow_mut().push(v));

        sw.on_event(&UiEvent::PointerDown { pos: at(20.0) }, rect());
        run_frames(&mut sw, 38); // ~600 ms
        assert!(sw.on_event(&UiEvent::PointerUp { pos: at(20.0) }, rect()).is_consumed());
        run_frames(&mut sw, 20);

        assert!(!sw.is_checked());
        assert_eq!(sw.thumb_position(), 0);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn long_press_timeout_follows_config() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20))
            .config(SwitchConfig::default().long_press_timeout(Duration::from_secs(1)));

        sw.on_event(&UiEvent::PointerDown { pos: at(20.0) }, rect());
        run_frames(&mut sw, 38);
        sw.on_event(&UiEvent::PointerUp { pos: at(20.0) }, rect());
        run_frames(&mut sw, 20);
        assert!(sw.is_checked());
    }

    #[test]
    fn drag_release_settles_by_midpoint() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20));
        sw.on_event(&UiEvent::PointerDown { pos: at(15.0) }, rect());
        // Drag past the right edge of the widget: still owned by the switch.
        sw.on_event(&UiEvent::PointerMove { pos: at(65.0) }, rect());
        assert_eq!(sw.thumb_position(), 50);
        sw.on_event(&UiEvent::PointerUp { pos: at(65.0) }, rect());
        run_frames(&mut sw, 10);
        assert!(sw.is_checked());
        assert_eq!(sw.thumb_position(), 80);

        sw.on_event(&UiEvent::PointerDown { pos: at(95.0) }, rect());
        sw.on_event(&UiEvent::PointerMove { pos: at(50.0) }, rect());
        assert_eq!(sw.thumb_position(), 35);
        sw.on_event(&UiEvent::PointerCancel, rect());
        run_frames(&mut sw, 10);
        assert!(!sw.is_checked());
        assert_eq!(sw.thumb_position(), 0);
    }

    #[test]
    fn down_outside_is_ignored() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20));
        let r = sw.on_event(&UiEvent::PointerDown { pos: at(200.0) }, rect());
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(sw.on_event(&UiEvent::PointerMove { pos: at(250.0) }, rect()), EventResult::Ignored);
        assert!(sw.take_requests().is_empty());
    }

    #[test]
    fn down_requests_disallow_intercept() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20));
        sw.on_event(&UiEvent::PointerDown { pos: at(20.0) }, rect());
        let r = sw.take_requests();
        assert!(r.disallow_intercept);
        assert!(r.redraw); // pressed state
    }

    #[test]
    fn disabled_switch_passes_events_through() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20)).enabled(false);
        sw.take_requests();
        assert_eq!(sw.on_event(&UiEvent::PointerDown { pos: at(20.0) }, rect()), EventResult::Ignored);
        assert_eq!(sw.on_event(&UiEvent::PointerUp { pos: at(20.0) }, rect()), EventResult::Ignored);
        assert!(!sw.is_checked());
        assert!(!sw.drawable_state().enabled);
    }

    #[test]
    fn disabling_mid_drag_snaps_back() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20));
        sw.on_event(&UiEvent::PointerDown { pos: at(20.0) }, rect());
        sw.on_event(&UiEvent::PointerMove { pos: at(80.0) }, rect());
        sw.set_enabled(false);
        assert_eq!(sw.thumb_position(), 0);
        assert!(!sw.drawable_state().pressed);
        sw.set_enabled(true);
        assert_eq!(sw.on_event(&UiEvent::PointerUp { pos: at(80.0) }, rect()), EventResult::Ignored);
    }

    // ── programmatic ──────────────────────────────────────────────────────

    #[test]
    fn set_checked_jumps_without_animation() {
        let mut sw = SmoothSwitch::new(track(100), thumb(20));
        sw.set_checked(true);
        assert_eq!(sw.thumb_position(), 80);
        assert_eq!(sw.controller().phase(), Phase::Idle);
        assert!(sw.take_requests().redraw);
    }

    #[test]
    fn swapping_assets_recomputes_span_and_requests_layout() {
        let mut res = Resources::new();
        res.insert(TRACK, track(60));
        let mut sw = SmoothSwitch::new(track(100), thumb(20)).checked(true);
        sw.take_requests();

        sw.set_track_resource(&res, TRACK).unwrap();
        assert_eq!(sw.controller().max_position(), 40);
        assert_eq!(sw.thumb_position(), 40);
        let r = sw.take_requests();
        assert!(r.layout && r.redraw);

        sw.set_thumb_drawable(thumb(70));
        assert_eq!(sw.controller().max_position(), 0);
        assert_eq!(sw.thumb_position(), 0);

        assert!(sw.set_thumb_resource(&res, THUMB).is_err());
        assert_eq!(sw.thumb_drawable().width(), 70);
    }
}
