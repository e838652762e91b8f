use pixelmeasure::data::measurement::Point;
use pixelmeasure::data::view::{
    display_to_plot, plot_to_display, ScrollDirection, ViewTransform, ZoomLimits,
};

#[test]
fn identity_view_maps_display_to_image_unchanged() {
    let view = ViewTransform::default();
    assert_eq!(view.image_point([100.0, 100.0]), Point::new(100, 100));
    assert_eq!(view.to_display([12.0, 34.0]), [12.0, 34.0]);
}

#[test]
fn inversion_truncates_toward_zero() {
    let view = ViewTransform::default();
    assert_eq!(view.image_point([-0.5, 2.9]), Point::new(0, 2));

    let zoomed = ViewTransform {
        scale: 2.0,
        offset: [10.0, 20.0],
    };
    // (25 - 10) / 2 = 7.5, (21 - 20) / 2 = 0.5
    assert_eq!(zoomed.image_point([25.0, 21.0]), Point::new(7, 0));
}

#[test]
fn scale_stays_within_limits_for_long_scroll_runs() {
    let limits = ZoomLimits::default();
    let mut view = ViewTransform::default();
    for _ in 0..100 {
        view.zoom_at(ScrollDirection::Up, [50.0, 50.0], &limits);
        assert!(view.scale <= limits.max + 1e-12);
    }
    assert!((view.scale - 10.0).abs() < 1e-12);
    for _ in 0..200 {
        view.zoom_at(ScrollDirection::Down, [5.0, 80.0], &limits);
        assert!(view.scale >= limits.min - 1e-12);
    }
    assert!((view.scale - 0.1).abs() < 1e-12);
}

#[test]
fn zoom_keeps_image_point_under_cursor_fixed() {
    let limits = ZoomLimits::default();
    let mut view = ViewTransform {
        scale: 1.7,
        offset: [-13.0, 42.5],
    };
    let cursor = [321.25, 97.5];
    for direction in [ScrollDirection::Up, ScrollDirection::Down, ScrollDirection::Up] {
        let under_cursor = view.to_image(cursor);
        view.zoom_at(direction, cursor, &limits);
        let back = view.to_display(under_cursor);
        assert!((back[0] - cursor[0]).abs() < 1e-9);
        assert!((back[1] - cursor[1]).abs() < 1e-9);
    }
}

#[test]
fn zoom_step_is_applied_once_per_notch() {
    let limits = ZoomLimits::default();
    let mut view = ViewTransform::default();
    view.zoom_at(ScrollDirection::Up, [0.0, 0.0], &limits);
    assert!((view.scale - 1.2).abs() < 1e-12);
    view.zoom_at(ScrollDirection::Down, [0.0, 0.0], &limits);
    assert!((view.scale - 1.0).abs() < 1e-12);
}

#[test]
fn wheel_delta_direction() {
    assert_eq!(ScrollDirection::from_wheel_delta(3.0), Some(ScrollDirection::Up));
    assert_eq!(ScrollDirection::from_wheel_delta(-0.5), Some(ScrollDirection::Down));
    assert_eq!(ScrollDirection::from_wheel_delta(0.0), None);
    assert_eq!(ScrollDirection::from_wheel_delta(f32::NAN), None);
}

#[test]
fn image_extent_follows_scale_and_offset() {
    let view = ViewTransform {
        scale: 0.5,
        offset: [4.0, -6.0],
    };
    let (xs, ys) = view.image_extent(200, 100);
    assert_eq!(xs, [4.0, 104.0]);
    assert_eq!(ys, [-6.0, 44.0]);
}

#[test]
fn plot_coordinates_flip_only_y() {
    assert_eq!(display_to_plot([12.5, 40.0]), [12.5, -40.0]);
    assert_eq!(plot_to_display([-3.0, -7.25]), [-3.0, 7.25]);
    let d = [321.0, -9.5];
    assert_eq!(plot_to_display(display_to_plot(d)), d);
}

#[test]
fn image_top_row_sits_at_top_of_plot() {
    let view = ViewTransform::default();
    let (_, ys) = view.image_extent(10, 10);
    let top = display_to_plot([0.0, ys[0]])[1];
    let bottom = display_to_plot([0.0, ys[1]])[1];
    assert!(top > bottom);
}

#[test]
fn default_zoom_limits_are_valid() {
    assert!(ZoomLimits::default().validate().is_ok());
}

#[test]
fn unusable_zoom_limits_are_rejected() {
    let bad = [
        ZoomLimits { step: 1.2, min: 10.0, max: 0.1 },
        ZoomLimits { step: 1.2, min: f64::NAN, max: 10.0 },
        ZoomLimits { step: 1.2, min: 0.1, max: f64::INFINITY },
        ZoomLimits { step: 1.2, min: 0.0, max: 10.0 },
        ZoomLimits { step: 1.2, min: -1.0, max: 10.0 },
        ZoomLimits { step: 1.0, min: 0.1, max: 10.0 },
        ZoomLimits { step: f64::NAN, min: 0.1, max: 10.0 },
    ];
    for limits in bad {
        assert!(limits.validate().is_err(), "{limits:?} should be rejected");
    }
}

#[test]
fn equal_min_and_max_pin_the_scale() {
    let limits = ZoomLimits { step: 1.2, min: 2.0, max: 2.0 };
    assert!(limits.validate().is_ok());
    let mut view = ViewTransform::default();
    view.zoom_at(ScrollDirection::Down, [5.0, 5.0], &limits);
    assert_eq!(view.scale, 2.0);
}
