use proptest::prelude::*;
use tonight_layout::{layout, AlignScope, Alignment, FlowItem, LayoutConstraints};

// Integer-valued sizes keep the f32 sums exact.
fn item_list() -> impl Strategy<Value = Vec<FlowItem>> {
    prop::collection::vec((0u16..300, 0u16..60), 0..40).prop_map(|sizes| {
        sizes
            .into_iter()
            .enumerate()
            .map(|(id, (w, h))| FlowItem::new(id, w as f32, h as f32))
            .collect()
    })
}

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Leading),
        Just(Alignment::Center),
        Just(Alignment::Trailing),
    ]
}

proptest! {
    #[test]
    fn every_item_appears_once_in_order(
        items in item_list(),
        width in 1u16..600,
        gap in 0u16..20,
    ) {
        let c = LayoutConstraints::new(width as f32).spacing(gap as f32, 4.0);
        let result = layout(&items, &c);
        let ids: Vec<usize> = result.rows.iter().flat_map(|r| r.ids()).collect();
        let expected: Vec<usize> = (0..items.len()).collect();
        prop_assert_eq!(ids, expected);
        prop_assert!(result.rows.iter().all(|r| !r.items.is_empty()));
    }

    #[test]
    fn rows_fit_unless_single_oversized(
        items in item_list(),
        width in 1u16..600,
        gap in 0u16..20,
    ) {
        let avail = width as f32;
        let c = LayoutConstraints::new(avail).spacing(gap as f32, 0.0);
        for row in layout(&items, &c).rows {
            let sum: f32 = row.items.iter().map(|i| i.width).sum::<f32>()
                + (row.items.len() as f32 - 1.0) * gap as f32;
            prop_assert_eq!(sum, row.width);
            if row.items.len() > 1 {
                prop_assert!(row.width <= avail);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(
        items in item_list(),
        width in 0u16..600,
        align in alignment(),
    ) {
        let c = LayoutConstraints::new(width as f32).aligned(align, AlignScope::AllRows);
        prop_assert_eq!(layout(&items, &c), layout(&items, &c));
    }

    #[test]
    fn wider_never_adds_rows(
        items in item_list(),
        width in 1u16..600,
        extra in 0u16..300,
        gap in 0u16..20,
    ) {
        let narrow = LayoutConstraints::new(width as f32).spacing(gap as f32, 0.0);
        let wide = LayoutConstraints::new((width + extra) as f32).spacing(gap as f32, 0.0);
        prop_assert!(layout(&items, &wide).rows.len() <= layout(&items, &narrow).rows.len());
    }

    #[test]
    fn rows_stack_without_gaps(
        items in item_list(),
        width in 1u16..600,
        vgap in 0u16..16,
    ) {
        let c = LayoutConstraints::new(width as f32).spacing(8.0, vgap as f32);
        let result = layout(&items, &c);
        let mut top = 0.0f32;
        for (i, row) in result.rows.iter().enumerate() {
            if i > 0 {
                top += vgap as f32;
            }
            prop_assert_eq!(row.top, top);
            prop_assert!(row.items.iter().all(|it| it.y == top && it.height <= row.height));
            top += row.height;
        }
        prop_assert_eq!(result.size.height, top);
        prop_assert_eq!(result.size.width, width as f32);
    }

    #[test]
    fn zero_width_gives_one_row_per_item(items in item_list()) {
        let result = layout(&items, &LayoutConstraints::new(0.0));
        prop_assert_eq!(result.rows.len(), items.len());
    }
}

#[test]
fn scenario_two_then_one() {
    let items: Vec<FlowItem> = (0..3).map(|i| FlowItem::new(i, 50.0, 10.0)).collect();
    let result = layout(&items, &LayoutConstraints::new(120.0).spacing(8.0, 0.0));
    let rows: Vec<Vec<usize>> = result.rows.iter().map(|r| r.ids().collect()).collect();
    assert_eq!(rows, vec![vec![0, 1], vec![2]]);
}

#[test]
fn scenario_trailing_shift() {
    let items = [FlowItem::new(0, 80.0, 10.0)];
    let c = LayoutConstraints::new(120.0).aligned(Alignment::Trailing, AlignScope::AllRows);
    let result = layout(&items, &c);
    assert_eq!(result.rows[0].width, 80.0);
    assert_eq!(result.rows[0].items[0].x, 40.0);
}
