use approx::assert_abs_diff_eq;
use linegraph_rs::core::{
    DataPoint, Padding, PlotLayout, SlotProjector, ValueRange, Viewport, category_label_indices,
    project_points,
};

fn layout_300x200() -> PlotLayout {
    PlotLayout::compute(Viewport::new(320, 220), Padding::uniform(10.0))
}

#[test]
fn three_points_are_centered_in_equal_slots() {
    let layout = layout_300x200();
    let points = vec![
        DataPoint::new(0, 0.0),
        DataPoint::new(1, 50.0),
        DataPoint::new(2, 100.0),
    ];

    let projected = project_points(&points, &layout, ValueRange::new(0.0, 100.0));
    assert_eq!(projected.len(), 3);

    // Slot width 100, offset 50, left padding 10.
    assert_abs_diff_eq!(projected[0].x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projected[1].x, 160.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projected[2].x, 260.0, epsilon = 1e-9);

    // top + 100%, top + 50%, top + 0% of the 200px axis.
    assert_abs_diff_eq!(projected[0].y, 210.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projected[1].y, 110.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projected[2].y, 10.0, epsilon = 1e-9);
}

#[test]
fn empty_series_projects_to_empty_sequence() {
    let projected = project_points(&[], &layout_300x200(), ValueRange::new(0.0, 100.0));
    assert!(projected.is_empty());
}

#[test]
fn single_point_sits_in_the_middle_of_the_axis() {
    let projector = SlotProjector::new(300.0, 200.0, 10.0, 10.0, ValueRange::new(0.0, 100.0));
    let projected = projector.project(&[DataPoint::new(0, 25.0)]);

    assert_eq!(projected.len(), 1);
    assert_abs_diff_eq!(projected[0].x, 160.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projected[0].y, 160.0, epsilon = 1e-9);
}

#[test]
fn consecutive_points_are_one_slot_apart() {
    let projector = SlotProjector::new(700.0, 100.0, 0.0, 0.0, ValueRange::new(0.0, 1.0));
    let points: Vec<DataPoint> = (0..7).map(|i| DataPoint::new(i, 0.5)).collect();

    let projected = projector.project(&points);
    assert_abs_diff_eq!(projector.slot_width(points.len()), 100.0, epsilon = 1e-9);
    for pair in projected.windows(2) {
        assert_abs_diff_eq!(pair[1].x - pair[0].x, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn degenerate_range_pins_every_point_to_vertical_midpoint() {
    let layout = layout_300x200();
    let points = vec![
        DataPoint::new(0, -5.0),
        DataPoint::new(1, 42.0),
        DataPoint::new(2, 1e9),
    ];

    let projected = project_points(&points, &layout, ValueRange::new(42.0, 42.0));
    assert_eq!(projected.len(), 3);
    for point in &projected {
        assert_eq!(point.y, layout.vertical_midpoint());
        assert!(point.x.is_finite());
    }
    assert_abs_diff_eq!(layout.vertical_midpoint(), 110.0, epsilon = 1e-9);
}

#[test]
fn larger_values_map_higher_on_screen() {
    let projector = SlotProjector::new(300.0, 200.0, 10.0, 10.0, ValueRange::new(-50.0, 50.0));
    assert!(projector.value_to_y(10.0) < projector.value_to_y(-10.0));
    assert_abs_diff_eq!(projector.value_to_y(50.0), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(projector.value_to_y(-50.0), 210.0, epsilon = 1e-9);
}

#[test]
fn values_outside_the_range_extend_past_the_drawable_area() {
    let projector = SlotProjector::new(300.0, 200.0, 10.0, 10.0, ValueRange::new(0.0, 100.0));
    assert_abs_diff_eq!(projector.value_to_y(150.0), -90.0, epsilon = 1e-9);
}

#[test]
fn overflowing_values_fall_back_to_vertical_midpoint() {
    let layout = layout_300x200();
    let points = vec![
        DataPoint::new(0, 0.2),
        DataPoint::new(1, 1e308),
        DataPoint::new(2, -1e308),
    ];

    let projected = project_points(&points, &layout, ValueRange::new(0.0, 1.0));
    assert_abs_diff_eq!(projected[0].y, 170.0, epsilon = 1e-9);
    assert_eq!(projected[1].y, layout.vertical_midpoint());
    assert_eq!(projected[2].y, layout.vertical_midpoint());
}

#[test]
fn projection_preserves_input_order() {
    let layout = layout_300x200();
    let points = vec![
        DataPoint::new(5, 80.0),
        DataPoint::new(1, 20.0),
        DataPoint::new(3, 60.0),
    ];

    let projected = project_points(&points, &layout, ValueRange::new(0.0, 100.0));
    assert!(projected[0].x < projected[1].x && projected[1].x < projected[2].x);
    assert!(projected[0].y < projected[2].y && projected[2].y < projected[1].y);
}

#[test]
fn every_fourth_position_gets_a_label() {
    let indices: Vec<usize> = category_label_indices(10, 4).collect();
    assert_eq!(indices, vec![0, 4, 8]);

    let indices: Vec<usize> = category_label_indices(4, 4).collect();
    assert_eq!(indices, vec![0]);

    assert_eq!(category_label_indices(0, 4).count(), 0);
}
