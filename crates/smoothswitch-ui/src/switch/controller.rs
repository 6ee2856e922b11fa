use std::time::Duration;

use crate::event::{EventResult, HostRequests};

use super::animation::{settle_duration, SettleTask, Step, TaskId};
use super::button::{Checkable, CompoundButton};
use super::config::SwitchConfig;

/// Thumb offset at the unchecked edge. The checked edge is `max_position`.
pub const MIN_POSITION: i32 = 0;

/// Coarse interaction state, for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Settling,
}

#[derive(Debug)]
enum State {
    Idle,
    Dragging { last_touch_x: f32 },
    Settling(SettleTask),
}

/// Owns the thumb position and turns pointer input into it.
///
/// Exactly one writer touches `position` at a time: the drag while
/// [`Phase::Dragging`], the settle task while [`Phase::Settling`]. Entering
/// either phase drops whatever settle task was live.
///
/// Between gestures the position always sits on an edge and agrees with the
/// button: `checked == (position == max_position)`.
pub struct SwitchController<B: Checkable = CompoundButton> {
    button: B,
    config: SwitchConfig,
    position: i32,
    max_position: i32,
    state: State,
    /// Down seen, matching up/cancel not yet.
    gesture_open: bool,
    next_task: u64,
    requests: HostRequests,
}

impl<B: Checkable> SwitchController<B> {
    /// Creates a controller resting on the edge that matches `button`.
    pub fn new(button: B, track_width: i32, thumb_width: i32) -> Self {
        let max_position = span_between(track_width, thumb_width);
        let position = if button.is_checked() { max_position } else { MIN_POSITION };
        Self {
            button,
            config: SwitchConfig::default(),
            position,
            max_position,
            state: State::Idle,
            gesture_open: false,
            next_task: 0,
            requests: HostRequests::default(),
        }
    }

    pub fn with_config(mut self, config: SwitchConfig) -> Self {
        self.config = config;
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline] pub fn position(&self) -> i32 { self.position }
    #[inline] pub fn min_position(&self) -> i32 { MIN_POSITION }
    #[inline] pub fn max_position(&self) -> i32 { self.max_position }
    #[inline] pub fn is_checked(&self) -> bool { self.button.is_checked() }
    #[inline] pub fn is_enabled(&self) -> bool { self.button.is_enabled() }
    #[inline] pub fn is_gesture_active(&self) -> bool { self.gesture_open }
    #[inline] pub fn config(&self) -> &SwitchConfig { &self.config }
    #[inline] pub fn button(&self) -> &B { &self.button }

    /// Mutable access to the underlying button (enable flag, listener).
    ///
    /// Use [`set_checked`](Self::set_checked) rather than the button's own
    /// setter so the thumb follows.
    #[inline]
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    pub fn set_config(&mut self, config: SwitchConfig) {
        self.config = config;
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Dragging { .. } => Phase::Dragging,
            State::Settling(_) => Phase::Settling,
        }
    }

    /// The live settle, if any.
    pub fn settle_task(&self) -> Option<&SettleTask> {
        match &self.state {
            State::Settling(task) => Some(task),
            _ => None,
        }
    }

    /// Drains the host requests accumulated since the last call.
    pub fn take_requests(&mut self) -> HostRequests {
        std::mem::take(&mut self.requests)
    }

    // ── pointer input ─────────────────────────────────────────────────────

    /// Starts a drag at `x`, superseding any settle in flight.
    pub fn handle_pointer_down(&mut self, x: f32) -> EventResult {
        if !self.button.is_enabled() {
            return EventResult::Ignored;
        }
        self.cancel_settle();
        self.state = State::Dragging { last_touch_x: x };
        self.gesture_open = true;
        self.requests.disallow_intercept = true;
        log::debug!("switch: drag start at x={x} position={}", self.position);
        EventResult::Consumed
    }

    /// Moves the thumb by the horizontal delta since the last pointer x,
    /// clamped hard to `[MIN_POSITION, max_position]`.
    ///
    /// Sub-pixel deltas are truncated toward zero and not carried over.
    /// A non-finite `x` is consumed without effect; the next finite x
    /// re-anchors the drag.
    pub fn handle_pointer_move(&mut self, x: f32) -> EventResult {
        if !self.button.is_enabled() || !self.gesture_open {
            return EventResult::Ignored;
        }
        let State::Dragging { last_touch_x } = &mut self.state else {
            return EventResult::Consumed;
        };
        if !x.is_finite() {
            return EventResult::Consumed;
        }
        if last_touch_x.is_finite() {
            let delta = (x - *last_touch_x) as i32;
            self.position = self
                .position
                .saturating_add(delta)
                .clamp(MIN_POSITION, self.max_position);
            self.requests.redraw = true;
        }
        *last_touch_x = x;
        log::trace!("switch: drag position={}", self.position);
        EventResult::Consumed
    }

    /// Ends the gesture and settles to the nearer edge, unless a tap already
    /// claimed this gesture.
    pub fn handle_pointer_up(&mut self, _x: f32) -> EventResult {
        self.finish_gesture()
    }

    /// Same as [`handle_pointer_up`](Self::handle_pointer_up).
    pub fn handle_pointer_cancel(&mut self) -> EventResult {
        self.finish_gesture()
    }

    /// Toggles the logical state with an animated settle, whatever the
    /// current thumb position. Takes priority over the up/cancel decision of
    /// the same gesture, so call it before `handle_pointer_up`.
    pub fn handle_single_tap(&mut self) -> EventResult {
        if !self.button.is_enabled() {
            return EventResult::Ignored;
        }
        let target = !self.button.is_checked();
        log::debug!("switch: tap, settling to checked={target}");
        self.animate_settle(target);
        EventResult::Consumed
    }

    fn finish_gesture(&mut self) -> EventResult {
        if !self.button.is_enabled() || !self.gesture_open {
            return EventResult::Ignored;
        }
        self.gesture_open = false;
        if let State::Dragging { .. } = self.state {
            // Strict `>`: a thumb exactly on the midpoint settles unchecked.
            let target = self.position > (MIN_POSITION + self.max_position) / 2;
            log::debug!("switch: release at position={}, settling to checked={target}", self.position);
            self.animate_settle(target);
        }
        EventResult::Consumed
    }

    /// Drops an open gesture without deciding anything, snapping back to the
    /// logical state. Used when the switch is disabled mid-drag.
    pub fn abandon_gesture(&mut self) {
        if !self.gesture_open && !matches!(self.state, State::Dragging { .. }) {
            return;
        }
        self.gesture_open = false;
        self.state = State::Idle;
        self.snap(self.button.is_checked());
    }

    // ── state ─────────────────────────────────────────────────────────────

    /// Sets the logical state immediately, without animation.
    ///
    /// Cancels a settle in flight. An open drag keeps going from the new
    /// position.
    pub fn set_checked(&mut self, checked: bool) {
        self.cancel_settle();
        self.snap(checked);
        self.button.set_checked(checked);
    }

    /// Animates the thumb to the edge for `target_checked`, then applies
    /// [`set_checked`](Self::set_checked).
    ///
    /// Duration is the configured full-span duration scaled by the remaining
    /// distance. When that rounds to zero (already there, or a zero-width
    /// track) the state is applied at once and `None` is returned.
    pub fn animate_settle(&mut self, target_checked: bool) -> Option<TaskId> {
        self.cancel_settle();
        self.state = State::Idle;

        let to = self.edge(target_checked);
        let duration = settle_duration(
            self.config.settle_duration,
            self.position,
            to,
            self.max_position - MIN_POSITION,
        );
        if duration.is_zero() {
            self.set_checked(target_checked);
            return None;
        }

        let id = TaskId(self.next_task);
        self.next_task = self.next_task.wrapping_add(1);
        log::debug!("switch: {id} {} -> {to} over {duration:?}", self.position);
        self.state = State::Settling(SettleTask::new(
            id,
            self.position,
            to,
            target_checked,
            duration,
            self.config.interpolator,
        ));
        Some(id)
    }

    /// Advances the live settle by `dt`. Returns `true` if the thumb moved.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let State::Settling(task) = &mut self.state else {
            return false;
        };
        match task.advance(dt) {
            Step::Running(p) => {
                self.position = p.clamp(MIN_POSITION, self.max_position);
                self.requests.redraw = true;
            }
            Step::Finished(_) => {
                let (id, checked) = (task.id(), task.target_checked());
                self.state = State::Idle;
                log::debug!("switch: {id} finished, checked={checked}");
                self.set_checked(checked);
            }
        }
        true
    }

    /// Recomputes `max_position` after a track or thumb asset change.
    ///
    /// A resting thumb moves to its edge; a dragged thumb is clamped; a
    /// settle in flight is restarted toward the new edge.
    pub fn set_extents(&mut self, track_width: i32, thumb_width: i32) {
        let max = span_between(track_width, thumb_width);
        if max == self.max_position {
            return;
        }
        log::debug!("switch: max position {} -> {max}", self.max_position);
        self.max_position = max;
        self.position = self.position.min(max);
        self.requests.redraw = true;

        match &self.state {
            State::Idle => self.snap(self.button.is_checked()),
            State::Dragging { .. } => {}
            State::Settling(task) => {
                let target = task.target_checked();
                self.animate_settle(target);
            }
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn cancel_settle(&mut self) {
        if let State::Settling(task) = &self.state {
            log::debug!("switch: {} cancelled at position={}", task.id(), self.position);
            self.state = State::Idle;
        }
    }

    fn snap(&mut self, checked: bool) {
        self.position = self.edge(checked);
        self.requests.redraw = true;
    }

    #[inline]
    fn edge(&self, checked: bool) -> i32 {
        if checked { self.max_position } else { MIN_POSITION }
    }
}

/// Travel available to the thumb inside the track; never negative.
#[inline]
fn span_between(track_width: i32, thumb_width: i32) -> i32 {
    track_width.saturating_sub(thumb_width).max(MIN_POSITION)
}
