use smoothswitch_engine::coords::Vec2;

/// Pointer events routed to a widget, in the widget's coordinate space.
///
/// A gesture is `PointerDown`, any number of `PointerMove`s, then exactly one
/// of `PointerUp` or `PointerCancel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Primary pointer went down at `pos`.
    PointerDown { pos: Vec2 },
    /// Primary pointer moved to `pos` while down.
    PointerMove { pos: Vec2 },
    /// Primary pointer released at `pos`.
    PointerUp { pos: Vec2 },
    /// The gesture was taken away (parent intercept, focus loss, platform cancel).
    PointerCancel,
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Requests a widget makes of its host, drained once per event or frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostRequests {
    /// Visual state changed; repaint.
    pub redraw: bool,
    /// Intrinsic size may have changed; measure again.
    pub layout: bool,
    /// Ancestors must not steal the gesture currently in progress.
    pub disallow_intercept: bool,
}

impl HostRequests {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == HostRequests::default()
    }

    /// OR-merges `other` into `self`.
    #[inline]
    pub fn merge(&mut self, other: HostRequests) {
        self.redraw |= other.redraw;
        self.layout |= other.layout;
        self.disallow_intercept |= other.disallow_intercept;
    }
}
