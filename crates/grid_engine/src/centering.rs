//! Horizontal centering pass

use grid_model::{GridBox, GridCoord};

/// Offset that horizontally balances `boxes` within `columns`.
///
/// Returns `None` for an empty collection. The bounding box runs from the
/// smallest `x` to the largest `x + w`; boxes waiting for a row still count.
pub fn centering_offset(boxes: &[GridBox], columns: u32) -> Option<GridCoord> {
    let min_x = boxes.iter().map(GridBox::x).min()?;
    let max_x = boxes.iter().map(GridBox::right).max()?;

    let span = max_x.saturating_sub(min_x);
    let left = GridCoord::from(columns).saturating_sub(span).div_euclid(2);
    Some(left.saturating_sub(min_x))
}

/// Recenter a collection horizontally within `columns`.
///
/// The result is ordered by row then column (append slots last). Only `x`
/// changes. Applying it twice gives the same result as applying it once.
pub fn center(boxes: &[GridBox], columns: u32) -> Vec<GridBox> {
    let Some(offset) = centering_offset(boxes, columns) else {
        return Vec::new();
    };

    let mut centered = boxes.to_vec();
    centered.sort_by_key(|b| (b.y(), b.x()));

    if offset != 0 {
        for b in &mut centered {
            b.shift_x(offset);
        }
    }

    tracing::trace!(
        target: "grid_engine::center",
        columns = columns,
        boxes = centered.len(),
        offset = offset,
        "centering pass"
    );

    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_model::{BoxId, RowSlot};

    fn xs(boxes: &[GridBox]) -> Vec<(&str, GridCoord)> {
        boxes.iter().map(|b| (b.id().as_str(), b.x())).collect()
    }

    #[test]
    fn test_two_boxes_in_ten_columns() {
        let boxes = vec![GridBox::new("a", 0, 0, 2, 1), GridBox::new("b", 2, 0, 2, 1)];
        assert_eq!(centering_offset(&boxes, 10), Some(3));

        let centered = center(&boxes, 10);
        assert_eq!(xs(&centered), vec![("a", 3), ("b", 5)]);
    }

    #[test]
    fn test_empty_is_noop() {
        assert_eq!(centering_offset(&[], 10), None);
        assert!(center(&[], 10).is_empty());
    }

    #[test]
    fn test_already_centered_is_unchanged() {
        let boxes = vec![GridBox::new("a", 3, 0, 2, 1), GridBox::new("b", 5, 0, 2, 1)];
        assert_eq!(centering_offset(&boxes, 10), Some(0));
        assert_eq!(center(&boxes, 10), boxes);
    }

    #[test]
    fn test_odd_slack_floors_left() {
        // span 2 in 5 columns leaves 3 units of slack: 1 left, 2 right
        let boxes = vec![GridBox::new("a", 3, 0, 2, 1)];
        let centered = center(&boxes, 5);
        assert_eq!(centered[0].x(), 1);
    }

    #[test]
    fn test_wider_than_grid_floors_toward_negative() {
        let boxes = vec![GridBox::new("a", 0, 0, 7, 1)];
        // (4 - 7) / 2 floors to -2
        assert_eq!(centering_offset(&boxes, 4), Some(-2));
        assert_eq!(center(&boxes, 4)[0].x(), -2);
    }

    #[test]
    fn test_output_sorted_by_row_then_column() {
        let boxes = vec![
            GridBox::appended(BoxId::new("new")),
            GridBox::new("low", 1, 2, 1, 1),
            GridBox::new("top-right", 3, 0, 1, 1),
            GridBox::new("top-left", 0, 0, 1, 1),
        ];
        let centered = center(&boxes, 4);
        let order: Vec<&str> = centered.iter().map(|b| b.id().as_str()).collect();
        assert_eq!(order, vec!["top-left", "top-right", "low", "new"]);
        assert_eq!(centered[3].y(), RowSlot::Append);
    }

    #[test]
    fn test_append_slot_counts_toward_bounds() {
        let boxes = vec![
            GridBox::new("a", 2, 0, 1, 1),
            GridBox::appended(BoxId::new("n")),
        ];
        // bounds 0..3 in 5 columns -> offset 1
        assert_eq!(centering_offset(&boxes, 5), Some(1));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let boxes = vec![
            GridBox::new("far", i64::MAX - 1, 0, 2, 1),
            GridBox::new("near", i64::MIN, 0, 1, 1),
        ];
        let centered = center(&boxes, 10);
        assert_eq!(centered.len(), 2);
    }

    #[test]
    fn test_only_x_changes() {
        let boxes = vec![GridBox::new("a", 0, 4, 2, 3)];
        let centered = center(&boxes, 10);
        assert_eq!(centered[0].y(), RowSlot::At(4));
        assert_eq!((centered[0].w(), centered[0].h()), (2, 3));
    }
}
