use ohlcv_plot::ChartError;
use ohlcv_plot::core::{GridLayout, Padding, Rect};
use ohlcv_plot::error::ShapeMismatch;

#[test]
fn weighted_rows_share_the_parent_height() {
    let layout = GridLayout::new(vec![2.0, 1.0], vec![1.0]).expect("layout");
    let parent = Rect::from_ltwh(0.0, 0.0, 1450.0, 300.0);

    let cells = layout.align_all(&[vec![(); 1], vec![(); 1]], parent).expect("cells");
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0][0], Rect::from_ltwh(0.0, 0.0, 1450.0, 200.0));
    assert_eq!(cells[1][0], Rect::from_ltwh(0.0, 200.0, 1450.0, 100.0));
}

#[test]
fn columns_split_width_by_weight() {
    let layout = GridLayout::new(vec![1.0], vec![1.0, 3.0]).expect("layout");
    let parent = Rect::from_ltwh(0.0, 0.0, 400.0, 100.0);

    let left = layout.sub_region(parent, 0, 0).expect("left");
    let right = layout.sub_region(parent, 1, 0).expect("right");
    assert_eq!(left, Rect::from_ltwh(0.0, 0.0, 100.0, 100.0));
    assert_eq!(right, Rect::from_ltwh(100.0, 0.0, 300.0, 100.0));
}

#[test]
fn out_of_range_cell_is_an_error() {
    let layout = GridLayout::new(vec![2.0, 1.0], vec![1.0]).expect("layout");
    let parent = Rect::from_ltwh(0.0, 0.0, 100.0, 100.0);

    let err = layout.sub_region(parent, 1, 0).expect_err("column out of range");
    assert!(matches!(
        err,
        ChartError::IndexOutOfRange {
            column: 1,
            row: 0,
            columns: 1,
            rows: 2,
        }
    ));
    assert!(layout.sub_region(parent, 0, 2).is_err());
}

#[test]
fn mismatched_arrangement_is_rejected() {
    let layout = GridLayout::new(vec![1.0, 1.0], vec![1.0, 1.0]).expect("layout");
    let parent = Rect::from_ltwh(0.0, 0.0, 100.0, 100.0);

    let too_few_rows = layout.align_all(&[vec![1, 2]], parent);
    assert!(matches!(
        too_few_rows,
        Err(ChartError::ShapeMismatch(ShapeMismatch::Rows {
            expected: 2,
            found: 1
        }))
    ));

    let ragged = layout.align_all(&[vec![1, 2], vec![3]], parent);
    assert!(matches!(
        ragged,
        Err(ChartError::ShapeMismatch(ShapeMismatch::Columns {
            row: 1,
            expected: 2,
            found: 1
        }))
    ));
}

#[test]
fn layout_loads_from_json_with_defaults() {
    let layout = GridLayout::from_json(r#"{"row_sizes":[3,1],"column_sizes":[1]}"#)
        .expect("json layout");
    assert_eq!(layout.row_sizes(), &[3.0, 1.0]);
    assert_eq!(layout.padding(), Padding::default());

    let padded = GridLayout::from_json(
        r#"{"row_sizes":[1],"column_sizes":[1],"padding":{"top":5,"bottom":5,"left":0,"right":0}}"#,
    )
    .expect("padded layout");
    let cell = padded
        .sub_region(Rect::from_ltwh(0.0, 0.0, 50.0, 50.0), 0, 0)
        .expect("cell");
    assert_eq!(cell, Rect::from_ltwh(0.0, 5.0, 50.0, 40.0));
}

#[test]
fn invalid_json_layouts_are_rejected() {
    assert!(GridLayout::from_json("not json").is_err());
    assert!(GridLayout::from_json(r#"{"row_sizes":[],"column_sizes":[1]}"#).is_err());
    assert!(GridLayout::from_json(r#"{"row_sizes":[1],"column_sizes":[-1]}"#).is_err());
}

#[test]
fn direct_deserialization_validates_the_layout() {
    let negative =
        serde_json::from_str::<GridLayout>(r#"{"row_sizes":[2.0,-1.0],"column_sizes":[1.0]}"#);
    assert!(negative.is_err());

    let gap = serde_json::from_str::<GridLayout>(
        r#"{"row_sizes":[1.0],"column_sizes":[1.0],"column_gap":-4.0}"#,
    );
    assert!(gap.is_err());

    let layout = GridLayout::new(vec![2.0, 1.0], vec![1.0])
        .and_then(|l| l.with_gaps(4.0, 2.0))
        .expect("layout");
    let json = serde_json::to_string(&layout).expect("serialize");
    let restored: GridLayout = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, layout);
}
