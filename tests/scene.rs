use pixelmeasure::data::measurement::{format_distance, segments, Point};
use pixelmeasure::data::scene::Scene;
use pixelmeasure::data::session::MeasureSession;
use pixelmeasure::data::view::ScrollDirection;

#[test]
fn three_four_five_triangle_label() {
    let mut s = MeasureSession::new(100, 100);
    s.on_click(Some([0.0, 0.0]));
    s.on_click(Some([3.0, 4.0]));
    let scene = Scene::build(&s);
    assert_eq!(scene.segments.len(), 1);
    assert_eq!(scene.segments[0].label, "5.0px");
    assert_eq!(scene.segments[0].midpoint, [1.5, 2.0]);
}

#[test]
fn labels_do_not_depend_on_zoom() {
    let mut s = MeasureSession::new(500, 500);
    s.on_click(Some([10.0, 10.0]));
    s.on_click(Some([70.0, 90.0]));
    s.on_click(Some([70.0, 20.0]));
    let before: Vec<String> = Scene::build(&s).segments.into_iter().map(|g| g.label).collect();

    s.on_scroll(Some(ScrollDirection::Up), Some([123.0, 45.0]));
    s.on_scroll(Some(ScrollDirection::Up), Some([300.0, 10.0]));
    let zoomed = Scene::build(&s);
    let after: Vec<String> = zoomed.segments.iter().map(|g| g.label.clone()).collect();

    assert_eq!(before, after);
    assert_eq!(after, vec!["100.0px".to_string(), "70.0px".to_string()]);
    // display geometry did move
    assert_ne!(zoomed.segments[0].from, [10.0, 10.0]);
}

#[test]
fn markers_and_bounds_follow_the_view() {
    let mut s = MeasureSession::new(200, 100);
    s.on_click(Some([50.0, 50.0]));
    s.on_scroll(Some(ScrollDirection::Up), Some([0.0, 0.0]));

    let scene = Scene::build(&s);
    let scale = s.view().scale;
    assert_eq!(scene.markers.len(), 1);
    assert!((scene.markers[0][0] - 50.0 * scale).abs() < 1e-9);
    assert_eq!(scene.x_range, [0.0, 200.0 * scale]);
    assert_eq!(scene.y_range, [0.0, 100.0 * scale]);
    assert_eq!(scene.size(), [200.0 * scale, 100.0 * scale]);
}

#[test]
fn single_point_has_marker_but_no_segment() {
    let mut s = MeasureSession::new(10, 10);
    s.on_click(Some([4.0, 4.0]));
    let scene = Scene::build(&s);
    assert_eq!(scene.markers.len(), 1);
    assert!(scene.segments.is_empty());
}

#[test]
fn segments_pair_consecutive_points_only() {
    let pts = [Point::new(0, 0), Point::new(6, 8), Point::new(6, 0)];
    let lens: Vec<f64> = segments(&pts).map(|s| s.length()).collect();
    assert_eq!(lens, vec![10.0, 8.0]);
}

#[test]
fn distance_is_formatted_with_one_decimal() {
    assert_eq!(format_distance(1.0f64.hypot(1.0)), "1.4px");
    assert_eq!(format_distance(0.0), "0.0px");
}
