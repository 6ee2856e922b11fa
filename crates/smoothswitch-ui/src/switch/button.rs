use std::fmt;

/// The two-state button contract the switch controller builds on.
pub trait Checkable {
    fn is_checked(&self) -> bool;

    /// Sets the logical state. Implementations notify listeners only when
    /// the value actually changes.
    fn set_checked(&mut self, checked: bool);

    fn is_enabled(&self) -> bool;
}

/// Plain checked/enabled state with an optional change listener.
pub struct CompoundButton {
    checked: bool,
    enabled: bool,
    on_checked_change: Option<Box<dyn FnMut(bool)>>,
}

impl CompoundButton {
    pub fn new(checked: bool) -> Self {
        Self { checked, enabled: true, on_checked_change: None }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Installs the listener fired after every effective `set_checked`.
    pub fn set_on_checked_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.on_checked_change = Some(Box::new(f));
    }
}

impl Default for CompoundButton {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for CompoundButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundButton")
            .field("checked", &self.checked)
            .field("enabled", &self.enabled)
            .field("listener", &self.on_checked_change.is_some())
            .finish()
    }
}

impl Checkable for CompoundButton {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        if let Some(f) = &mut self.on_checked_change {
            f(checked);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
