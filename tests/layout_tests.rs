use linegraph_rs::core::{Padding, PlotLayout, Viewport};

#[test]
fn drawable_rect_is_bounds_inset_by_padding() {
    let layout = PlotLayout::compute(Viewport::new(400, 300), Padding::new(12.0, 30.0, 20.0, 8.0));
    let rect = layout.drawable_rect();

    assert_eq!(layout.x_axis_length, 372.0);
    assert_eq!(layout.y_axis_length, 258.0);
    assert_eq!(rect.x, 20.0);
    assert_eq!(rect.y, 12.0);
    assert_eq!(rect.right(), 392.0);
    assert_eq!(rect.bottom(), 270.0);
    assert!(layout.has_plot_area());
}

#[test]
fn bounds_smaller_than_padding_clamp_axis_to_zero() {
    let layout = PlotLayout::compute(Viewport::new(15, 300), Padding::uniform(10.0));

    assert_eq!(layout.x_axis_length, 0.0);
    assert_eq!(layout.y_axis_length, 280.0);
    assert!(!layout.has_plot_area());
}

#[test]
fn zero_sized_viewport_has_no_plot_area() {
    let layout = PlotLayout::compute(Viewport::new(0, 0), Padding::default());

    assert_eq!(layout.x_axis_length, 0.0);
    assert_eq!(layout.y_axis_length, 0.0);
    assert!(!layout.has_plot_area());
}

#[test]
fn negative_padding_is_clamped_to_zero() {
    let layout = PlotLayout::compute(
        Viewport::new(200, 100),
        Padding::new(-5.0, f64::NAN, -1.0, 10.0),
    );

    assert_eq!(layout.padding, Padding::new(0.0, 0.0, 0.0, 10.0));
    assert_eq!(layout.x_axis_length, 190.0);
    assert_eq!(layout.y_axis_length, 100.0);
}

#[test]
fn label_anchors_follow_drawable_rect() {
    let layout = PlotLayout::compute(Viewport::new(320, 220), Padding::uniform(10.0));

    assert_eq!(layout.category_label_anchor(60.0), (60.0, 210.0));
    assert_eq!(layout.x_title_anchor(), (160.0, 220.0));
    assert_eq!(layout.y_title_anchor(), (10.0, 10.0));
    assert_eq!(layout.upper_scale_anchor(), (310.0, 10.0));
    assert_eq!(layout.lower_scale_anchor(), (310.0, 210.0));
}
