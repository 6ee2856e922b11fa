use smoothswitch_engine::coords::Rect;

use crate::drawable::{Drawable, DrawableState};

/// One recorded draw: a drawable placed into bounds, in a given state.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub drawable: Drawable,
    pub bounds: Rect,
    pub state: DrawableState,
    /// Paint order; higher draws on top.
    pub z: i32,
}

/// Recorded draw stream for one frame.
///
/// Items are stored in paint order (back-to-front). `clear` keeps capacity.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Finds the last item drawn with the given drawable label.
    pub fn find(&self, label: &str) -> Option<&DrawItem> {
        self.items.iter().rev().find(|it| it.drawable.label() == label)
    }
}

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Places `drawable` into `bounds`, stretched to fill them.
    pub fn draw_drawable(&mut self, drawable: &Drawable, bounds: Rect, state: DrawableState) {
        let z = self.z;
        self.z += 1;
        self.draw_list.items.push(DrawItem { drawable: drawable.clone(), bounds, state, z });
    }
}
