use std::f32::consts::PI;
use std::fmt;
use std::time::Duration;

// ── Interpolator ──────────────────────────────────────────────────────────

/// Easing curve applied to linear progress `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolator {
    /// Constant speed.
    Linear,
    /// Slow start and end, fastest at the midpoint: `cos((t + 1)π) / 2 + 0.5`.
    #[default]
    AccelerateDecelerate,
}

impl Interpolator {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

// ── Duration ──────────────────────────────────────────────────────────────

/// Time a settle from `from` to `to` takes, proportional to the share of
/// `span` it covers: `full_span * |to - from| / span`, in whole milliseconds.
///
/// A non-positive `span` (zero-width track) yields zero.
pub fn settle_duration(full_span: Duration, from: i32, to: i32, span: i32) -> Duration {
    if span <= 0 {
        return Duration::ZERO;
    }
    let distance = u128::from(from.abs_diff(to));
    let ms = full_span.as_millis() * distance / span as u128;
    Duration::from_millis(u64::try_from(ms).unwrap_or(u64::MAX))
}

// ── SettleTask ────────────────────────────────────────────────────────────

/// Identity of one started settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "settle#{}", self.0)
    }
}

/// Outcome of advancing a [`SettleTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still moving; the position for this frame.
    Running(i32),
    /// Done; always exactly the end position.
    Finished(i32),
}

/// A time-sliced integer animation from `from` to `to`.
///
/// The task owns no callback: whoever holds it applies each [`Step`].
/// Dropping the task is cancelling it, so a cancelled settle can never
/// complete.
#[derive(Debug, Clone)]
pub struct SettleTask {
    id: TaskId,
    from: i32,
    to: i32,
    target_checked: bool,
    duration: Duration,
    elapsed: Duration,
    interpolator: Interpolator,
}

impl SettleTask {
    pub fn new(
        id: TaskId,
        from: i32,
        to: i32,
        target_checked: bool,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Self {
        Self { id, from, to, target_checked, duration, elapsed: Duration::ZERO, interpolator }
    }

    #[inline] pub fn id(&self) -> TaskId { self.id }
    #[inline] pub fn from(&self) -> i32 { self.from }
    #[inline] pub fn to(&self) -> i32 { self.to }
    #[inline] pub fn target_checked(&self) -> bool { self.target_checked }
    #[inline] pub fn duration(&self) -> Duration { self.duration }
    #[inline] pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Moves the task forward by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Step {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.elapsed >= self.duration {
            return Step::Finished(self.to);
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Step::Running(self.value_at(t))
    }

    /// Position at linear progress `fraction`, truncated toward zero.
    pub fn value_at(&self, fraction: f32) -> i32 {
        let f = self.interpolator.apply(fraction);
        (self.from as f32 + f * (self.to - self.from) as f32) as i32
    }
}
