use std::time::Duration;

use smoothswitch_engine::coords::Vec2;

use crate::event::UiEvent;

/// Classifies a pointer sequence as a single tap.
///
/// A tap is a down/up pair where the pointer never left the circle of
/// radius `touch_slop` around the down point and was released before
/// `long_press_timeout` elapsed. Cancelled sequences are never taps.
/// Non-finite positions are ignored.
///
/// Time only moves through [`advance`](Self::advance), fed from the frame
/// clock.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    slop_sq: f32,
    long_press_timeout: Duration,
    down: Option<Vec2>,
    held: Duration,
    in_tap_region: bool,
}

impl GestureDetector {
    pub fn new(touch_slop: f32, long_press_timeout: Duration) -> Self {
        let slop = touch_slop.max(0.0);
        Self {
            slop_sq: slop * slop,
            long_press_timeout,
            down: None,
            held: Duration::ZERO,
            in_tap_region: false,
        }
    }

    /// Accounts `dt` against the press in progress, if any.
    pub fn advance(&mut self, dt: Duration) {
        if self.down.is_some() {
            self.held = self.held.saturating_add(dt);
        }
    }

    /// `true` once the current press has been held past the long-press timeout.
    pub fn is_long_press(&self) -> bool {
        self.down.is_some() && self.held >= self.long_press_timeout
    }

    /// Feeds one event. Returns `true` exactly when `event` completes a tap.
    pub fn on_event(&mut self, event: &UiEvent) -> bool {
        match *event {
            UiEvent::PointerDown { pos } => {
                self.down = Some(pos);
                self.held = Duration::ZERO;
                self.in_tap_region = true;
                false
            }
            UiEvent::PointerMove { pos } => {
                self.track(pos);
                false
            }
            UiEvent::PointerUp { pos } => {
                self.track(pos);
                let tapped = self.down.is_some() && self.in_tap_region && !self.is_long_press();
                self.reset();
                tapped
            }
            UiEvent::PointerCancel => {
                self.reset();
                false
            }
        }
    }

    fn track(&mut self, pos: Vec2) {
        let Some(down) = self.down else { return };
        if !pos.is_finite() || !down.is_finite() {
            return;
        }
        if pos.distance_squared(down) > self.slop_sq {
            self.in_tap_region = false;
        }
    }

    fn reset(&mut self) {
        self.down = None;
        self.held = Duration::ZERO;
        self.in_tap_region = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f32) -> UiEvent { UiEvent::PointerDown { pos: Vec2::new(x, 10.0) } }
    fn mv(x: f32) -> UiEvent { UiEvent::PointerMove { pos: Vec2::new(x, 10.0) } }
    fn up(x: f32) -> UiEvent { UiEvent::PointerUp { pos: Vec2::new(x, 10.0) } }
    fn detector() -> GestureDetector { GestureDetector::new(8.0, Duration::from_millis(500)) }

    #[test]
    fn still_press_is_a_tap() {
        let mut g = detector();
        assert!(!g.on_event(&down(10.0)));
        assert!(g.on_event(&up(10.0)));
    }

    #[test]
    fn jitter_inside_slop_is_a_tap() {
        let mut g = detector();
        g.on_event(&down(10.0));
        g.on_event(&mv(15.0));
        assert!(g.on_event(&up(12.0)));
    }

    #[test]
    fn leaving_slop_is_not_a_tap_even_if_returning() {
        let mut g = detector();
        g.on_event(&down(10.0));
        g.on_event(&mv(40.0));
        g.on_event(&mv(10.0));
        assert!(!g.on_event(&up(10.0)));
    }

    #[test]
    fn cancel_is_never_a_tap() {
        let mut g = detector();
        g.on_event(&down(10.0));
        assert!(!g.on_event(&UiEvent::PointerCancel));
        assert!(!g.on_event(&up(10.0)));
    }

    #[test]
    fn up_without_down_is_not_a_tap() {
        let mut g = detector();
        assert!(!g.on_event(&up(10.0)));
    }

    #[test]
    fn nan_moves_are_ignored() {
        let mut g = detector();
        g.on_event(&down(10.0));
        g.on_event(&mv(f32::NAN));
        assert!(g.on_event(&up(10.0)));
    }

    // ── long press ────────────────────────────────────────────────────────

    #[test]
    fn held_past_timeout_is_not_a_tap() {
        let mut g = detector();
        g.on_event(&down(10.0));
        g.advance(Duration::from_millis(300));
        assert!(!g.is_long_press());
        g.advance(Duration::from_millis(300));
        assert!(g.is_long_press());
        assert!(!g.on_event(&up(10.0)));
    }

    #[test]
    fn quick_press_is_still_a_tap() {
        let mut g = detector();
        g.on_event(&down(10.0));
        g.advance(Duration::from_millis(480));
        assert!(g.on_event(&up(10.0)));
    }

    #[test]
    fn idle_time_does_not_count_toward_next_press() {
        let mut g = detector();
        g.advance(Duration::from_secs(2));
        g.on_event(&down(10.0));
        assert!(!g.is_long_press());
        assert!(g.on_event(&up(10.0)));
    }
}
