//! Property tests for centering, reconciliation, and controller operations
//!
//! Box collections are generated with unique ids and arbitrary geometry,
//! including boxes waiting for an appended row.

use grid_engine::{center, reconcile, GridController};
use grid_model::{BoxId, ContentPayload, GridBox, GridModel, LayoutItem, RowSlot};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn row_slot() -> impl Strategy<Value = RowSlot> {
    prop_oneof![
        4 => (0u32..8).prop_map(RowSlot::At),
        1 => Just(RowSlot::Append),
    ]
}

fn content() -> impl Strategy<Value = Option<ContentPayload>> {
    prop_oneof![
        Just(None),
        "[a-z]{1,8}".prop_map(|s| Some(ContentPayload::text(s))),
        "[a-z]{1,8}".prop_map(|s| Some(ContentPayload::image(format!("https://img/{s}.png")))),
        "[A-Z][a-z]{1,8}".prop_map(|s| Some(ContentPayload::component_ref(s))),
    ]
}

fn boxes(max: usize) -> impl Strategy<Value = Vec<GridBox>> {
    prop::collection::vec((-6i64..12, row_slot(), 1u32..6, 1u32..4, content()), 1..max).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (x, y, w, h, content))| {
                    let b = GridBox::in_slot(format!("box{i}"), x, y, w, h);
                    match content {
                        Some(c) => b.with_content(c),
                        None => b,
                    }
                })
                .collect()
        },
    )
}

fn bounds(boxes: &[GridBox]) -> (i64, i64) {
    let min = boxes.iter().map(GridBox::x).min().unwrap();
    let max = boxes.iter().map(GridBox::right).max().unwrap();
    (min, max)
}

fn ids(boxes: &[GridBox]) -> BTreeSet<String> {
    boxes.iter().map(|b| b.id().to_string()).collect()
}

proptest! {
    #[test]
    fn centering_is_idempotent(bs in boxes(12), columns in 1u32..16) {
        let once = center(&bs, columns);
        let twice = center(&once, columns);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn centering_balances_bounding_box(bs in boxes(12), columns in 1u32..16) {
        let centered = center(&bs, columns);
        let (min, max) = bounds(&centered);
        let imbalance = min + max - i64::from(columns);
        prop_assert!(imbalance == 0 || imbalance == -1, "min {} max {} columns {}", min, max, columns);
    }

    #[test]
    fn centering_changes_only_x(bs in boxes(12), columns in 1u32..16) {
        let centered = center(&bs, columns);
        prop_assert_eq!(ids(&centered), ids(&bs));
        for b in &centered {
            let original = bs.iter().find(|o| o.id() == b.id()).unwrap();
            prop_assert_eq!(b.y(), original.y());
            prop_assert_eq!((b.w(), b.h()), (original.w(), original.h()));
            prop_assert_eq!(b.content(), original.content());
        }
    }

    #[test]
    fn reconcile_preserves_ids_and_content(
        bs in boxes(10),
        reports in prop::collection::vec((0usize..14, -3i64..10, 0u32..8, -2i64..6, -2i64..5), 0..12),
    ) {
        let updates: Vec<LayoutItem> = reports
            .into_iter()
            .map(|(i, x, row, w, h)| LayoutItem::new(format!("box{i}"), x, row, w, h))
            .collect();
        let merged = reconcile(&bs, &updates);

        prop_assert_eq!(merged.len(), bs.len());
        for (before, after) in bs.iter().zip(&merged) {
            prop_assert_eq!(before.id(), after.id());
            prop_assert_eq!(before.content(), after.content());
            prop_assert!(after.w() >= 1 && after.h() >= 1);
        }
    }

    #[test]
    fn reconcile_last_write_wins(bs in boxes(6), first in 0i64..5, last in 0i64..5) {
        let target = bs[0].id().clone();
        let updates = vec![
            LayoutItem::new(target.clone(), first, 0, 1, 1),
            LayoutItem::new(target.clone(), last, 1, 2, 1),
        ];
        let merged = reconcile(&bs, &updates);
        let b = merged.iter().find(|b| b.id() == &target).unwrap();
        prop_assert_eq!(b.x(), last);
        prop_assert_eq!(b.y(), RowSlot::At(1));
        prop_assert_eq!(b.w(), 2);
    }

    #[test]
    fn layout_update_repeats_are_idempotent(
        bs in boxes(8),
        reports in prop::collection::vec((0usize..10, 0i64..10, 0u32..8, 1i64..6, 1i64..5), 0..10),
    ) {
        let updates: Vec<LayoutItem> = reports
            .into_iter()
            .map(|(i, x, row, w, h)| LayoutItem::new(BoxId::new(format!("box{i}")), x, row, w, h))
            .collect();
        let mut ctl = GridController::new(GridModel::from_boxes(10, bs).unwrap());
        ctl.apply_layout_update(&updates);
        let once = ctl.snapshot();
        ctl.apply_layout_update(&updates);
        prop_assert_eq!(ctl.snapshot(), once);
    }

    #[test]
    fn delete_leaves_balanced_layout(bs in boxes(12), columns in 1u32..16, pick in any::<prop::sample::Index>()) {
        let victim = bs[pick.index(bs.len())].id().clone();
        let mut ctl = GridController::new(GridModel::from_boxes(columns, bs.clone()).unwrap());

        prop_assert!(ctl.delete_box(victim.as_str()));
        prop_assert_eq!(ctl.model().len(), bs.len() - 1);
        prop_assert!(!ctl.model().contains(victim.as_str()));

        if !ctl.model().is_empty() {
            let (min, max) = bounds(ctl.model().boxes());
            let imbalance = min + max - i64::from(columns);
            prop_assert!(imbalance == 0 || imbalance == -1);
        }
    }

    #[test]
    fn unknown_id_operations_are_noops(bs in boxes(10)) {
        let mut ctl = GridController::new(GridModel::from_boxes(10, bs).unwrap());
        let before = ctl.snapshot();

        prop_assert!(!ctl.set_content("nonexistent", ContentPayload::text("x")));
        prop_assert!(!ctl.delete_box("nonexistent"));
        prop_assert_eq!(ctl.snapshot(), before);
    }
}

#[test]
fn scenario_two_boxes_in_ten_columns() {
    let boxes = vec![GridBox::new("a", 0, 0, 2, 1), GridBox::new("b", 2, 0, 2, 1)];
    let centered = center(&boxes, 10);

    assert_eq!(centered[0].id().as_str(), "a");
    assert_eq!(centered[0].x(), 3);
    assert_eq!(centered[1].id().as_str(), "b");
    assert_eq!(centered[1].x(), 5);
}

#[test]
fn scenario_delete_from_three_box_layout() {
    let boxes = center(
        &[
            GridBox::new("a", 0, 0, 2, 1),
            GridBox::new("b", 2, 0, 3, 1),
            GridBox::new("c", 5, 0, 1, 1),
        ],
        10,
    );
    let mut ctl = GridController::new(GridModel::from_boxes(10, boxes).unwrap());
    assert!(ctl.delete_box("a"));

    let (min, max) = bounds(ctl.model().boxes());
    assert_eq!(ctl.model().len(), 2);
    assert!((min + max - 10).abs() <= 1);
}

#[test]
fn scenario_component_reference_shrink() {
    let mut ctl = GridController::new(
        GridModel::from_boxes(10, vec![GridBox::new("big", 0, 0, 4, 4), GridBox::new("tiny", 4, 0, 1, 1)])
            .unwrap(),
    );
    ctl.set_content("big", ContentPayload::component_ref("InfiniteAnchorScroll"));
    ctl.set_content("tiny", ContentPayload::component_ref("InfiniteAnchorScroll"));

    let big = ctl.model().get("big").unwrap();
    let tiny = ctl.model().get("tiny").unwrap();
    assert_eq!((big.w(), big.h()), (2, 2));
    assert_eq!((tiny.w(), tiny.h()), (1, 1));
}
