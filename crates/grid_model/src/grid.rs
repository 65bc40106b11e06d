//! The canonical box collection

use crate::{seed_boxes, GridBox, GridModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of columns, matching the widest breakpoint
pub const DEFAULT_COLUMNS: u32 = 5;

/// Ordered collection of boxes plus the column count.
///
/// Box order is display order only; it carries no positional meaning.
/// Ids are unique and sizes are at least one unit at all times. Overlap is
/// allowed: it is the layout surface's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridModelData")]
pub struct GridModel {
    columns: u32,
    boxes: Vec<GridBox>,
}

/// Unvalidated form used for deserialization
#[derive(Deserialize)]
struct GridModelData {
    columns: u32,
    #[serde(default)]
    boxes: Vec<GridBox>,
}

impl TryFrom<GridModelData> for GridModel {
    type Error = GridModelError;

    fn try_from(data: GridModelData) -> Result<Self> {
        Self::from_boxes(data.columns, data.boxes)
    }
}

impl GridModel {
    /// Create an empty grid
    pub fn new(columns: u32) -> Result<Self> {
        Self::from_boxes(columns, Vec::new())
    }

    /// Create a grid from an existing collection, checking invariants
    pub fn from_boxes(columns: u32, boxes: Vec<GridBox>) -> Result<Self> {
        if columns == 0 {
            return Err(GridModelError::InvalidColumns(columns));
        }
        validate_boxes(&boxes)?;
        Ok(Self { columns, boxes })
    }

    /// The starting composition at the default column count
    pub fn seed() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            boxes: seed_boxes(),
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn boxes(&self) -> &[GridBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GridBox> {
        self.boxes.iter().find(|b| b.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Swap in a whole new collection.
    ///
    /// The replacement is checked first; on error the grid is left as it was.
    pub fn replace_boxes(&mut self, boxes: Vec<GridBox>) -> Result<()> {
        validate_boxes(&boxes)?;
        self.boxes = boxes;
        Ok(())
    }

    /// Change the column count without touching any box
    pub fn set_columns(&mut self, columns: u32) -> Result<()> {
        if columns == 0 {
            return Err(GridModelError::InvalidColumns(columns));
        }
        self.columns = columns;
        Ok(())
    }
}

fn validate_boxes(boxes: &[GridBox]) -> Result<()> {
    let mut seen = HashSet::with_capacity(boxes.len());
    for b in boxes {
        if b.id().is_empty() {
            return Err(GridModelError::EmptyBoxId);
        }
        if b.w() == 0 || b.h() == 0 {
            return Err(GridModelError::InvalidSize {
                id: b.id().clone(),
                w: b.w(),
                h: b.h(),
            });
        }
        if !seen.insert(b.id().as_str()) {
            return Err(GridModelError::DuplicateBoxId(b.id().clone()));
        }
    }
    Ok(())
}
