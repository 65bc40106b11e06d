//! Merging layout-surface geometry reports into the canonical collection

use grid_model::{BoxId, GridBox, LayoutItem};
use std::collections::HashMap;

/// Outcome of a reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The merged collection, in the input order
    pub boxes: Vec<GridBox>,
    /// Number of boxes whose geometry was replaced
    pub applied: usize,
    /// Report ids that matched no box
    pub ignored: Vec<BoxId>,
    /// Number of applied reports with a span below one unit
    pub clamped: usize,
}

/// Merge `updates` into `boxes` by id.
///
/// Matching boxes take the reported `x, y, w, h` (spans clamped to one
/// unit) and keep their content. Boxes without a report pass through, and
/// reports for unknown ids are dropped. When an id is reported more than
/// once, the last report wins.
pub fn reconcile(boxes: &[GridBox], updates: &[LayoutItem]) -> Vec<GridBox> {
    reconcile_detailed(boxes, updates).boxes
}

/// Same as [`reconcile`], also reporting what was applied and dropped
pub fn reconcile_detailed(boxes: &[GridBox], updates: &[LayoutItem]) -> Reconciliation {
    let latest: HashMap<&str, &LayoutItem> = updates
        .iter()
        .map(|item| (item.id.as_str(), item))
        .collect();

    let mut applied = 0;
    let mut clamped = 0;
    let merged: Vec<GridBox> = boxes
        .iter()
        .map(|b| {
            let mut next = b.clone();
            if let Some(item) = latest.get(b.id().as_str()) {
                next.apply_layout(item);
                applied += 1;
                if item.is_degenerate() {
                    clamped += 1;
                }
            }
            next
        })
        .collect();

    let mut ignored: Vec<BoxId> = latest
        .keys()
        .filter(|id| !boxes.iter().any(|b| b.id().as_str() == **id))
        .map(|id| BoxId::new(*id))
        .collect();
    ignored.sort();

    Reconciliation {
        boxes: merged,
        applied,
        ignored,
        clamped,
    }
}
