use std::time::Duration;

use super::animation::Interpolator;

/// Duration of a settle across the full track span.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(250);

/// Radius the pointer may wander from the down point and still count as a tap.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// A still press held this long is a long press, not a tap.
pub const DEFAULT_LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Tunables for one switch.
///
/// ```rust,ignore
/// SwitchConfig::default()
///     .settle_duration(Duration::from_millis(400))
///     .interpolator(Interpolator::Linear)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchConfig {
    pub settle_duration: Duration,
    pub touch_slop: f32,
    pub long_press_timeout: Duration,
    pub interpolator: Interpolator,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            settle_duration: DEFAULT_SETTLE_DURATION,
            touch_slop: DEFAULT_TOUCH_SLOP,
            long_press_timeout: DEFAULT_LONG_PRESS_TIMEOUT,
            interpolator: Interpolator::default(),
        }
    }
}

impl SwitchConfig {
    pub fn settle_duration(mut self, v: Duration) -> Self { self.settle_duration = v; self }
    pub fn touch_slop(mut self, v: f32) -> Self { self.touch_slop = v.max(0.0); self }
    pub fn long_press_timeout(mut self, v: Duration) -> Self { self.long_press_timeout = v; self }
    pub fn interpolator(mut self, v: Interpolator) -> Self { self.interpolator = v; self }
}
