//! A single cell of the composition

use crate::{BoxId, ContentPayload, GridCoord, LayoutItem, RowSlot};
use serde::{Deserialize, Serialize};

/// One box in the grid: identity, position, size, and optional content.
///
/// Sizes never drop below one grid unit; every constructor and setter
/// clamps. The id is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBox {
    id: BoxId,
    x: GridCoord,
    y: RowSlot,
    w: u32,
    h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<ContentPayload>,
}

impl GridBox {
    /// Create an empty box in a concrete row
    pub fn new(id: impl Into<BoxId>, x: GridCoord, row: u32, w: u32, h: u32) -> Self {
        Self::in_slot(id, x, RowSlot::At(row), w, h)
    }

    /// Create an empty box with an explicit row slot
    pub fn in_slot(id: impl Into<BoxId>, x: GridCoord, y: RowSlot, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w: w.max(1),
            h: h.max(1),
            content: None,
        }
    }

    /// A 1x1 empty box waiting for the layout surface to give it a row
    pub fn appended(id: BoxId) -> Self {
        Self::in_slot(id, 0, RowSlot::Append, 1, 1)
    }

    pub fn with_content(mut self, content: ContentPayload) -> Self {
        self.content = Some(content);
        self
    }

    pub fn id(&self) -> &BoxId {
        &self.id
    }

    pub fn x(&self) -> GridCoord {
        self.x
    }

    pub fn y(&self) -> RowSlot {
        self.y
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    /// Right edge (exclusive) in grid units
    pub fn right(&self) -> GridCoord {
        self.x.saturating_add(GridCoord::from(self.w))
    }

    pub fn content(&self) -> Option<&ContentPayload> {
        self.content.as_ref()
    }

    /// Whether the box holds content, as opposed to showing the add affordance
    pub fn is_filled(&self) -> bool {
        self.content.is_some()
    }

    /// Replace the content payload
    pub fn set_content(&mut self, content: ContentPayload) {
        self.content = Some(content);
    }

    /// Replace position and size, clamping sizes to one unit
    pub fn set_geometry(&mut self, x: GridCoord, y: RowSlot, w: u32, h: u32) {
        self.x = x;
        self.y = y;
        self.w = w.max(1);
        self.h = h.max(1);
    }

    /// Apply a layout report, keeping content untouched
    pub fn apply_layout(&mut self, item: &LayoutItem) {
        self.set_geometry(item.clamped_x(), item.y, item.clamped_w(), item.clamped_h());
    }

    /// Move horizontally by `dx` grid units
    pub fn shift_x(&mut self, dx: GridCoord) {
        self.x = self.x.saturating_add(dx);
    }

    /// Halve both spans, flooring, never below one unit
    pub fn halve_size(&mut self) {
        self.w = (self.w / 2).max(1);
        self.h = (self.h / 2).max(1);
    }
}
