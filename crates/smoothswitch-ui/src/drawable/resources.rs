use std::collections::HashMap;
use std::fmt;

use super::{AssetError, Drawable};

/// Opaque handle to a registered drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:#010x}", self.0)
    }
}

/// Drawable table that resource ids resolve against.
#[derive(Debug, Default)]
pub struct Resources {
    drawables: HashMap<ResourceId, Drawable>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `drawable` under `id`, returning whatever was there before.
    pub fn insert(&mut self, id: ResourceId, drawable: Drawable) -> Option<Drawable> {
        log::debug!("resource {id} -> '{}' ({}x{})", drawable.label(), drawable.width(), drawable.height());
        self.drawables.insert(id, drawable)
    }

    /// Resolves `id` to a (shared) drawable.
    pub fn drawable(&self, id: ResourceId) -> Result<Drawable, AssetError> {
        self.drawables.get(&id).cloned().ok_or_else(|| {
            log::warn!("no drawable registered for {id}");
            AssetError::UnknownResource(id)
        })
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}
