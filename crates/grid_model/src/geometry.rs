//! Grid-unit geometry shared with the external layout surface

use crate::BoxId;
use serde::{Deserialize, Serialize};

/// Horizontal coordinate in grid units.
///
/// Signed because centering may shift a composition wider than the grid
/// past the left edge.
pub type GridCoord = i64;

/// Largest distance from column zero a reported position may have.
///
/// Positions from the layout surface are clamped into
/// `-COORD_LIMIT..=COORD_LIMIT`, which keeps every bounding-box and
/// centering sum far from `i64` overflow.
pub const COORD_LIMIT: GridCoord = 1 << 32;

/// Vertical placement of a box.
///
/// `Append` stands in for "after every existing row"; the layout surface
/// resolves it to a concrete row on its next pass. On the wire it is `null`,
/// any other row is a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum RowSlot {
    /// A concrete row, counted from the top
    At(u32),
    /// Unassigned; placed below all current content by the layout surface
    Append,
}

impl RowSlot {
    pub fn row(&self) -> Option<u32> {
        match self {
            Self::At(row) => Some(*row),
            Self::Append => None,
        }
    }
}

impl Default for RowSlot {
    fn default() -> Self {
        Self::Append
    }
}

impl From<Option<u32>> for RowSlot {
    fn from(row: Option<u32>) -> Self {
        row.map_or(Self::Append, Self::At)
    }
}

impl From<RowSlot> for Option<u32> {
    fn from(slot: RowSlot) -> Self {
        slot.row()
    }
}

impl From<u32> for RowSlot {
    fn from(row: u32) -> Self {
        Self::At(row)
    }
}

/// A position/size report for one box, as emitted by the layout surface at
/// the end of a drag or resize gesture.
///
/// Sizes are signed so that degenerate reports (zero or negative spans seen
/// mid-gesture) deserialize and can be clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    #[serde(rename = "i")]
    pub id: BoxId,
    pub x: GridCoord,
    pub y: RowSlot,
    pub w: i64,
    pub h: i64,
}

impl LayoutItem {
    /// A report placing the box in a concrete row
    pub fn new(id: impl Into<BoxId>, x: GridCoord, row: u32, w: i64, h: i64) -> Self {
        Self::in_slot(id, x, RowSlot::At(row), w, h)
    }

    pub fn in_slot(id: impl Into<BoxId>, x: GridCoord, y: RowSlot, w: i64, h: i64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// Position clamped into `-COORD_LIMIT..=COORD_LIMIT`
    pub fn clamped_x(&self) -> GridCoord {
        self.x.clamp(-COORD_LIMIT, COORD_LIMIT)
    }

    /// Width clamped to the minimum of one grid unit
    pub fn clamped_w(&self) -> u32 {
        clamp_span(self.w)
    }

    /// Height clamped to the minimum of one grid unit
    pub fn clamped_h(&self) -> u32 {
        clamp_span(self.h)
    }

    /// Whether either reported span was below one unit
    pub fn is_degenerate(&self) -> bool {
        self.w < 1 || self.h < 1
    }
}

fn clamp_span(span: i64) -> u32 {
    u32::try_from(span.max(1)).unwrap_or(u32::MAX)
}
