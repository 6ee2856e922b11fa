use smoothswitch_engine::coords::{Rect, Vec2};
use smoothswitch_engine::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
    TouchEvent, TouchPhase,
};
use smoothswitch_engine::time::FrameTime;

use crate::constraints::Constraints;
use crate::event::{EventResult, HostRequests, UiEvent};
use crate::painter::{DrawList, Painter};
use crate::widget::Widget;

/// Which pointer a gesture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    source: Source,
    start: Vec2,
    /// The widget asked ancestors not to intercept.
    claimed: bool,
    /// The parent took the gesture; the widget sees nothing more of it.
    intercepted: bool,
}

/// Minimal host for a single root widget.
///
/// Translates engine `InputEvent`s into widget gestures, advances animations
/// once per frame, honours the widget's layout/redraw requests, and records
/// what it paints. It can also play an intercepting parent (think scroll
/// container): once a drag leaves `slop` around its down point, the parent
/// steals it with a `PointerCancel` unless the widget claimed the gesture.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = UiScene::new(switch, Rect::new(0.0, 0.0, 320.0, 48.0))
///     .with_parent_intercept(8.0);
/// scene.dispatch(&event);
/// let draw_list = scene.frame(&clock.tick());
/// ```
pub struct UiScene<W: Widget> {
    root: W,
    bounds: Rect,
    root_rect: Rect,
    input: InputState,
    draw_list: DrawList,
    requests: HostRequests,
    intercept_slop: Option<f32>,
    gesture: Option<Gesture>,
    needs_layout: bool,
}

impl<W: Widget> UiScene<W> {
    pub fn new(root: W, bounds: Rect) -> Self {
        let mut scene = Self {
            root,
            bounds,
            root_rect: Rect::default(),
            input: InputState { focused: true, ..InputState::default() },
            draw_list: DrawList::new(),
            requests: HostRequests::default(),
            intercept_slop: None,
            gesture: None,
            needs_layout: true,
        };
        scene.layout();
        scene
    }

    /// Makes the scene behave like a parent that scrolls on drags past `slop`.
    pub fn with_parent_intercept(mut self, slop: f32) -> Self {
        self.intercept_slop = Some(slop.max(0.0));
        self
    }

    #[inline] pub fn root(&self) -> &W { &self.root }
    #[inline] pub fn root_rect(&self) -> Rect { self.root_rect }
    #[inline] pub fn input(&self) -> &InputState { &self.input }
    #[inline] pub fn draw_list(&self) -> &DrawList { &self.draw_list }

    /// Mutable root access. Requests the widget makes are picked up on the
    /// next `dispatch` or `frame`.
    #[inline]
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.needs_layout = true;
    }

    /// Everything the root has requested since the last call.
    pub fn take_requests(&mut self) -> HostRequests {
        self.pump();
        std::mem::take(&mut self.requests)
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Feeds one platform event through to the root widget.
    ///
    /// A gesture belongs to the pointer that started it. While the mouse owns
    /// one, fingers are neither routed nor promoted to primary touch, and a
    /// finger-owned gesture ignores the mouse.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventResult {
        self.pump();
        let translated = self.translate(event);
        let mouse_owns = self.owner() == Some(Source::Mouse);
        if !(mouse_owns && matches!(event, InputEvent::Touch(_))) {
            self.input.apply_event(event);
        }
        match translated {
            Some((ev, source)) => self.route(ev, source),
            None => EventResult::Ignored,
        }
    }

    fn owner(&self) -> Option<Source> {
        self.gesture.map(|g| g.source)
    }

    fn translate(&self, event: &InputEvent) -> Option<(UiEvent, Source)> {
        let owner = self.owner();
        match *event {
            InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y }) => {
                let pos = Vec2::new(x, y);
                let ev = match state {
                    MouseButtonState::Pressed if owner.is_none() => UiEvent::PointerDown { pos },
                    MouseButtonState::Released if owner == Some(Source::Mouse) => UiEvent::PointerUp { pos },
                    _ => return None,
                };
                Some((ev, Source::Mouse))
            }
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) if owner == Some(Source::Mouse) => {
                Some((UiEvent::PointerMove { pos: Vec2::new(x, y) }, Source::Mouse))
            }
            InputEvent::Touch(TouchEvent { id, phase, x, y }) => {
                let pos = Vec2::new(x, y);
                let source = Source::Touch(id);
                let ev = match phase {
                    TouchPhase::Started if owner.is_none() && self.input.primary_touch.is_none() => {
                        UiEvent::PointerDown { pos }
                    }
                    _ if owner != Some(source) => return None,
                    TouchPhase::Started => return None,
                    TouchPhase::Moved => UiEvent::PointerMove { pos },
                    TouchPhase::Ended => UiEvent::PointerUp { pos },
                    TouchPhase::Cancelled => UiEvent::PointerCancel,
                };
                Some((ev, source))
            }
            InputEvent::Focused(false) => owner.map(|source| (UiEvent::PointerCancel, source)),
            _ => None,
        }
    }

    fn route(&mut self, ev: UiEvent, source: Source) -> EventResult {
        if let UiEvent::PointerDown { pos } = ev {
            self.gesture = Some(Gesture { source, start: pos, claimed: false, intercepted: false });
        }
        let Some(gesture) = self.gesture else {
            return EventResult::Ignored;
        };
        let ends = matches!(ev, UiEvent::PointerUp { .. } | UiEvent::PointerCancel);

        if gesture.intercepted {
            if ends {
                self.gesture = None;
            }
            return EventResult::Consumed;
        }

        if let (UiEvent::PointerMove { pos }, Some(slop)) = (ev, self.intercept_slop) {
            if !gesture.claimed && pos.distance_squared(gesture.start) > slop * slop {
                log::debug!("scene: parent intercepted gesture at {pos:?}");
                self.root.on_event(&UiEvent::PointerCancel, self.root_rect);
                self.pump();
                self.gesture = Some(Gesture { intercepted: true, ..gesture });
                return EventResult::Consumed;
            }
        }

        let result = self.root.on_event(&ev, self.root_rect);
        self.pump();
        if ends {
            self.gesture = None;
        }
        result
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Advances animations, re-lays out if asked, and repaints.
    pub fn frame(&mut self, time: &FrameTime) -> &DrawList {
        if self.root.on_frame(time) {
            self.requests.redraw = true;
        }
        self.pump();
        if self.needs_layout {
            self.layout();
        }

        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list);
        self.root.paint(&mut painter, self.root_rect);
        &self.draw_list
    }

    fn layout(&mut self) {
        let size = self.root.measure(Constraints::loose(self.bounds.size));
        self.root_rect = Rect { origin: self.bounds.origin, size };
        self.needs_layout = false;
        log::trace!("scene: root laid out at {:?}", self.root_rect);
    }

    /// Drains root requests into the scene.
    fn pump(&mut self) {
        let r = self.root.take_requests();
        if r.disallow_intercept {
            if let Some(g) = &mut self.gesture {
                g.claimed = true;
            }
        }
        if r.layout {
            self.needs_layout = true;
        }
        self.requests.merge(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Drawable;
    use crate::widgets::smooth_switch::SmoothSwitch;
    use smoothswitch_engine::time::FrameClock;
    use std::time::Duration;

    fn switch() -> SmoothSwitch {
        SmoothSwitch::new(
            Drawable::solid("track", 100, 30, [0, 0, 0, 255]).unwrap(),
            Drawable::solid("thumb", 20, 30, [255, 255, 255, 255]).unwrap(),
        )
    }

    fn scene<W: Widget>(root: W) -> UiScene<W> {
        UiScene::new(root, Rect::new(0.0, 0.0, 300.0, 60.0))
    }

    fn mouse(state: MouseButtonState, x: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y: 10.0 })
    }

    fn moved(x: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y: 10.0 })
    }

    fn touch(id: u64, phase: TouchPhase, x: f32) -> InputEvent {
        InputEvent::Touch(TouchEvent { id, phase, x, y: 10.0 })
    }

    fn run(scene: &mut UiScene<impl Widget>, frames: usize) {
        let mut clock = FrameClock::new();
        for _ in 0..frames {
            scene.frame(&clock.advance(Duration::from_millis(16)));
        }
    }

    /// Records what reaches it and never claims a gesture.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<UiEvent>,
    }

    impl Widget for Recorder {
        fn measure(&self, constraints: Constraints) -> Vec2 {
            constraints.constrain(Vec2::new(100.0, 30.0))
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
        fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
            self.seen.push(*event);
            EventResult::Consumed
        }
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn root_is_measured_into_bounds() {
        let s = scene(switch());
        assert_eq!(s.root_rect(), Rect::new(0.0, 0.0, 100.0, 30.0));
    }

    #[test]
    fn asset_change_triggers_relayout() {
        let mut s = scene(switch());
        s.root_mut().set_track_drawable(Drawable::solid("track", 140, 30, [0; 4]).unwrap());
        run(&mut s, 1);
        assert_eq!(s.root_rect().size.x, 140.0);
        assert!(s.take_requests().layout);
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    #[test]
    fn mouse_drag_moves_and_settles() {
        let mut s = scene(switch());
        assert!(s.dispatch(&mouse(MouseButtonState::Pressed, 10.0)).is_consumed());
        s.dispatch(&moved(70.0));
        assert_eq!(s.root().thumb_position(), 60);
        s.dispatch(&mouse(MouseButtonState::Released, 70.0));
        run(&mut s, 10);
        assert!(s.root().is_checked());

        let thumb = s.draw_list().find("thumb").unwrap();
        assert_eq!(thumb.bounds.origin.x, 80.0);
    }

    #[test]
    fn hover_moves_are_not_routed() {
        let mut s = scene(Recorder::default());
        s.dispatch(&moved(20.0));
        assert!(s.root().seen.is_empty());
    }

    // ── parent intercept ──────────────────────────────────────────────────

    #[test]
    fn claimed_drag_survives_intercepting_parent() {
        let mut s = scene(switch()).with_parent_intercept(8.0);
        s.dispatch(&mouse(MouseButtonState::Pressed, 10.0));
        s.dispatch(&moved(60.0));
        assert_eq!(s.root().thumb_position(), 50);
        assert!(s.take_requests().disallow_intercept);
    }

    #[test]
    fn unclaimed_drag_is_stolen_by_parent() {
        let mut s = scene(Recorder::default()).with_parent_intercept(8.0);
        s.dispatch(&mouse(MouseButtonState::Pressed, 10.0));
        s.dispatch(&moved(14.0));
        s.dispatch(&moved(40.0));
        s.dispatch(&moved(60.0));
        s.dispatch(&mouse(MouseButtonState::Released, 60.0));

        let seen = &s.root().seen;
        assert_eq!(seen.len(), 3);
        assert!(matches!(seen[0], UiEvent::PointerDown { .. }));
        assert!(matches!(seen[1], UiEvent::PointerMove { .. }));
        assert_eq!(seen[2], UiEvent::PointerCancel);
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn touch_tap_toggles_and_second_finger_is_ignored() {
        let mut s = scene(switch());
        s.dispatch(&touch(1, TouchPhase::Started, 30.0));
        assert_eq!(s.dispatch(&touch(2, TouchPhase::Started, 90.0)), EventResult::Ignored);
        s.dispatch(&touch(2, TouchPhase::Moved, 10.0));
        assert_eq!(s.root().thumb_position(), 0);
        s.dispatch(&touch(1, TouchPhase::Ended, 30.0));
        run(&mut s, 20);
        assert!(s.root().is_checked());
    }

    #[test]
    fn stray_finger_cannot_take_over_mouse_drag() {
        let mut s = scene(switch());
        s.dispatch(&mouse(MouseButtonState::Pressed, 10.0));

        assert_eq!(s.dispatch(&touch(5, TouchPhase::Started, 250.0)), EventResult::Ignored);
        assert_eq!(s.dispatch(&touch(5, TouchPhase::Moved, 80.0)), EventResult::Ignored);
        assert_eq!(s.root().thumb_position(), 0);
        assert_eq!(s.input().primary_touch, None);

        assert!(s.dispatch(&moved(60.0)).is_consumed());
        assert_eq!(s.root().thumb_position(), 50);
        assert_eq!(s.dispatch(&touch(5, TouchPhase::Ended, 80.0)), EventResult::Ignored);
        assert_eq!(s.root().thumb_position(), 50);

        s.dispatch(&mouse(MouseButtonState::Released, 60.0));
        run(&mut s, 10);
        assert!(s.root().is_checked());
    }

    #[test]
    fn mouse_cannot_take_over_touch_drag() {
        let mut s = scene(switch());
        s.dispatch(&touch(3, TouchPhase::Started, 10.0));
        assert_eq!(s.dispatch(&mouse(MouseButtonState::Pressed, 90.0)), EventResult::Ignored);
        assert_eq!(s.dispatch(&moved(5.0)), EventResult::Ignored);
        s.dispatch(&touch(3, TouchPhase::Moved, 30.0));
        assert_eq!(s.root().thumb_position(), 20);
        assert_eq!(s.dispatch(&mouse(MouseButtonState::Released, 5.0)), EventResult::Ignored);
        assert_eq!(s.root().controller().phase(), crate::switch::Phase::Dragging);
    }

    #[test]
    fn platform_touch_cancel_settles() {
        let mut s = scene(switch());
        s.dispatch(&touch(4, TouchPhase::Started, 5.0));
        s.dispatch(&touch(4, TouchPhase::Moved, 75.0));
        s.dispatch(&touch(4, TouchPhase::Cancelled, 75.0));
        run(&mut s, 10);
        assert!(s.root().is_checked());
        assert_eq!(s.root().thumb_position(), 80);
    }

    #[test]
    fn focus_loss_cancels_gesture() {
        let mut s = scene(Recorder::default());
        s.dispatch(&mouse(MouseButtonState::Pressed, 10.0));
        s.dispatch(&InputEvent::Focused(false));
        s.dispatch(&mouse(MouseButtonState::Released, 10.0));
        assert_eq!(s.root().seen.last(), Some(&UiEvent::PointerCancel));
        assert_eq!(s.root().seen.len(), 2);
    }
}
