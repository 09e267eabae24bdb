use approx::assert_abs_diff_eq;

use zenspace_core::geometry::{DisplayRect, PixelRect, Point};
use zenspace_core::gesture::{DragGesture, PointerKind};

#[test]
fn test_to_surface_scales_axes_independently() {
    // 800x600 surface squashed into 200x300.
    let rect = DisplayRect::new(40.0, 10.0, 200.0, 300.0);
    let p = rect.to_surface(Point::new(140.0, 160.0), 800, 600);
    assert_abs_diff_eq!(p.x, 400.0, epsilon = 1e-4);
    assert_abs_diff_eq!(p.y, 300.0, epsilon = 1e-4);
}

#[test]
fn test_to_surface_origin_maps_to_zero() {
    let rect = DisplayRect::new(-25.0, 7.5, 100.0, 50.0);
    let p = rect.to_surface(Point::new(-25.0, 7.5), 1024, 512);
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn test_to_surface_degenerate_axis_is_identity() {
    let rect = DisplayRect::new(10.0, 10.0, f32::NAN, 50.0);
    let p = rect.to_surface(Point::new(30.0, 35.0), 400, 200);
    assert_abs_diff_eq!(p.x, 20.0);
    assert_abs_diff_eq!(p.y, 100.0, epsilon = 1e-4);
    assert!(!rect.is_measurable());
}

#[test]
fn test_contains_is_inclusive() {
    let rect = DisplayRect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains(Point::new(0.0, 0.0)));
    assert!(rect.contains(Point::new(10.0, 10.0)));
    assert!(!rect.contains(Point::new(10.1, 5.0)));
    assert!(!rect.contains(Point::new(5.0, -0.1)));
}

#[test]
fn test_clamped_offset_x() {
    let rect = DisplayRect::new(100.0, 0.0, 200.0, 10.0);
    assert_eq!(rect.clamped_offset_x(50.0), 0.0);
    assert_eq!(rect.clamped_offset_x(150.0), 50.0);
    assert_eq!(rect.clamped_offset_x(1000.0), 200.0);
    assert_eq!(rect.clamped_offset_x(f32::NAN), 0.0);
    assert_eq!(DisplayRect::sized(-5.0, 10.0).clamped_offset_x(3.0), 0.0);
}

#[test]
fn test_pixel_rect_edges() {
    let r = PixelRect {
        x: 3,
        y: 4,
        width: 10,
        height: 2,
    };
    assert_eq!(r.right(), 13);
    assert_eq!(r.bottom(), 6);
}

#[test]
fn test_drag_gesture_two_phases() {
    let mut g = DragGesture::default();
    assert!(!g.is_active());
    assert_eq!(g.kind(), None);
    assert!(!g.end());

    g.begin(PointerKind::Touch);
    assert!(g.is_active());
    assert_eq!(g.kind(), Some(PointerKind::Touch));

    assert!(g.end());
    assert!(!g.is_active());
}

#[test]
fn test_point_distance() {
    assert_abs_diff_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    assert_eq!(Point::from([1.5, 2.5]), Point::new(1.5, 2.5));
}
