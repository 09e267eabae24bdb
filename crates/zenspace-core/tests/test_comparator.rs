#[allow(dead_code)]
mod common;

use approx::assert_abs_diff_eq;

use zenspace_core::capture::PointerCapture;
use zenspace_core::comparator::{compose_split, split_column, Boundary, SplitComparator};
use zenspace_core::config::ComparatorConfig;
use zenspace_core::error::ZenspaceError;
use zenspace_core::geometry::{DisplayRect, Point};
use zenspace_core::gesture::{Disposition, PointerEvent, PointerKind, PointerPhase};
use zenspace_core::source::ImageSource;

use common::{encode_png, solid_image, BLUE, GREEN};

fn sources() -> (ImageSource, ImageSource) {
    (
        ImageSource::Encoded(encode_png(&solid_image(4, 4, BLUE))),
        ImageSource::Encoded(encode_png(&solid_image(4, 4, GREEN))),
    )
}

fn comparator(capture: &PointerCapture) -> SplitComparator {
    let (before, after) = sources();
    SplitComparator::new(before, after, capture)
}

// ---------------------------------------------------------------------------
// Boundary tracking
// ---------------------------------------------------------------------------

#[test]
fn test_drag_on_200px_surface() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::new(0.0, 0.0, 200.0, 150.0);
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);

    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Down, 10.0, 75.0), &display);
    assert!(cmp.is_dragging());
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);

    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Move, 10.0, 75.0), &display);
    assert_abs_diff_eq!(cmp.boundary().percent(), 5.0, epsilon = 1e-4);

    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Move, 90.0, 75.0), &display);
    assert_abs_diff_eq!(cmp.boundary().percent(), 45.0, epsilon = 1e-4);

    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Move, 260.0, 75.0), &display);
    assert_abs_diff_eq!(cmp.boundary().percent(), 100.0);

    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Up, 260.0, 75.0), &display);
    assert!(!cmp.is_dragging());
    assert_abs_diff_eq!(cmp.boundary().percent(), 100.0);
}

#[test]
fn test_click_without_move_keeps_boundary() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);

    assert_eq!(
        cmp.handle_event(&PointerEvent::mouse(PointerPhase::Down, 10.0, 50.0), &display),
        Disposition::Handled
    );
    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Up, 10.0, 50.0), &display);
    assert!(!cmp.is_dragging());
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);
}

#[test]
fn test_set_after_keeps_before() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);
    let before = cmp.before().clone();
    let next = ImageSource::Path("variation-2.png".into());

    cmp.pointer_down(PointerKind::Mouse);
    cmp.pointer_move(Point::new(20.0, 50.0), &display);
    cmp.set_after(next.clone());

    assert_eq!(cmp.before(), &before);
    assert_eq!(cmp.after(), &next);
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);
    assert_eq!(capture.active_count(), 0);
}

#[test]
fn test_boundary_always_clamped() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::new(50.0, 0.0, 300.0, 100.0);

    cmp.pointer_down(PointerKind::Touch);
    for x in [-1e6, -50.0, 0.0, 49.0, 50.0, 200.0, 350.0, 351.0, 1e6, f32::INFINITY, f32::NEG_INFINITY] {
        cmp.pointer_move(Point::new(x, 50.0), &display);
        let b = cmp.boundary().percent();
        assert!((0.0..=100.0).contains(&b), "x={x} produced boundary {b}");
    }
}

#[test]
fn test_boundary_constructor_clamps() {
    assert_eq!(Boundary::new(-20.0).percent(), 0.0);
    assert_eq!(Boundary::new(140.0).percent(), 100.0);
    assert_eq!(Boundary::new(f32::NAN).percent(), 50.0);
    assert_eq!(Boundary::default().percent(), 50.0);
}

#[test]
fn test_moves_without_press_are_ignored() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);
    let d = cmp.handle_event(&PointerEvent::mouse(PointerPhase::Move, 20.0, 10.0), &display);
    assert_eq!(d, Disposition::Ignored);
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);
}

#[test]
fn test_press_outside_surface_is_ignored() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::new(100.0, 100.0, 200.0, 100.0);
    let d = cmp.handle_event(&PointerEvent::mouse(PointerPhase::Down, 10.0, 10.0), &display);
    assert_eq!(d, Disposition::Ignored);
    assert!(!cmp.is_dragging());
    assert_eq!(capture.active_count(), 0);
}

#[test]
fn test_leave_does_not_end_drag() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);
    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Down, 100.0, 50.0), &display);
    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Leave, 205.0, 50.0), &display);
    assert!(cmp.is_dragging());

    // Moves outside the surface keep tracking while captured.
    cmp.handle_event(&PointerEvent::mouse(PointerPhase::Move, -40.0, 300.0), &display);
    assert_abs_diff_eq!(cmp.boundary().percent(), 0.0);
}

#[test]
fn test_touch_drag_prevents_default() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);
    cmp.handle_event(&PointerEvent::touch(PointerPhase::Down, 100.0, 50.0), &display);
    let d = cmp.handle_event(&PointerEvent::touch(PointerPhase::Move, 120.0, 50.0), &display);
    assert_eq!(d, Disposition::PreventDefault);
    assert_eq!(
        cmp.handle_event(&PointerEvent::touch(PointerPhase::Cancel, 120.0, 50.0), &display),
        Disposition::Handled
    );
    assert!(!cmp.is_dragging());
}

#[test]
fn test_unmeasurable_display_keeps_boundary() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::new(0.0, 0.0, 0.0, 100.0);
    cmp.pointer_down(PointerKind::Mouse);
    cmp.pointer_move(Point::new(40.0, 10.0), &display);
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);
    assert!(Boundary::from_display_x(40.0, &display).is_none());
}

// ---------------------------------------------------------------------------
// Pointer capture lifetime
// ---------------------------------------------------------------------------

#[test]
fn test_capture_released_on_release() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);

    cmp.pointer_down(PointerKind::Mouse);
    assert_eq!(capture.active_count(), 1);
    assert!(cmp.has_capture());

    assert_eq!(cmp.pointer_up(), Disposition::Handled);
    assert_eq!(capture.active_count(), 0);
    assert!(!cmp.has_capture());
    assert_eq!(cmp.pointer_up(), Disposition::Ignored);
}

#[test]
fn test_capture_released_on_image_swap() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);
    cmp.pointer_down(PointerKind::Mouse);
    cmp.pointer_move(Point::new(30.0, 50.0), &display);
    assert_abs_diff_eq!(cmp.boundary().percent(), 15.0, epsilon = 1e-4);

    let (before, after) = sources();
    cmp.set_images(after, before);
    assert_eq!(capture.active_count(), 0);
    assert!(!cmp.is_dragging());
    assert_abs_diff_eq!(cmp.boundary().percent(), 50.0);
}

#[test]
fn test_capture_released_on_teardown_mid_drag() {
    let capture = PointerCapture::new();
    {
        let mut cmp = comparator(&capture);
        cmp.pointer_down(PointerKind::Touch);
        assert!(capture.is_captured());
    }
    assert_eq!(capture.active_count(), 0);
}

#[test]
fn test_instances_are_independent() {
    let capture = PointerCapture::new();
    let mut a = comparator(&capture);
    let mut b = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);

    a.pointer_down(PointerKind::Mouse);
    b.pointer_move(Point::new(180.0, 10.0), &display);
    assert_abs_diff_eq!(b.boundary().percent(), 50.0);
    assert!(!b.has_capture());

    a.pointer_move(Point::new(180.0, 10.0), &display);
    assert_abs_diff_eq!(a.boundary().percent(), 90.0, epsilon = 1e-4);
    drop(a);
    assert_eq!(capture.active_count(), 0);
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_layout_follows_boundary() {
    let capture = PointerCapture::new();
    let (before, after) = sources();
    let config = ComparatorConfig {
        default_boundary: 25.0,
        ..ComparatorConfig::default()
    };
    let cmp = SplitComparator::with_config(before, after, &capture, &config);
    let display = DisplayRect::new(10.0, 20.0, 200.0, 100.0);

    let layout = cmp.layout(&display);
    assert_abs_diff_eq!(layout.divider_x, 60.0);
    assert_abs_diff_eq!(layout.before_clip.left, 10.0);
    assert_abs_diff_eq!(layout.before_clip.width, 50.0);
    assert_abs_diff_eq!(layout.before_clip.height, 100.0);
    assert_abs_diff_eq!(layout.handle.left + layout.handle.width / 2.0, 60.0);
    assert!(layout.grab.width > layout.handle.width);
    assert!(layout.before_label_anchor.x < layout.after_label_anchor.x);
    assert_eq!(cmp.before_label(), "ORIGINAL");
    assert_eq!(cmp.after_label(), "AI GENERATED");
}

#[test]
fn test_layout_extremes() {
    let capture = PointerCapture::new();
    let mut cmp = comparator(&capture);
    let display = DisplayRect::sized(200.0, 100.0);

    cmp.pointer_down(PointerKind::Mouse);
    cmp.pointer_move(Point::new(-10.0, 50.0), &display);
    assert_abs_diff_eq!(cmp.layout(&display).before_clip.width, 0.0);

    cmp.pointer_move(Point::new(500.0, 50.0), &display);
    assert_abs_diff_eq!(cmp.layout(&display).before_clip.width, 200.0);
}

// ---------------------------------------------------------------------------
// Headless rendering
// ---------------------------------------------------------------------------

#[test]
fn test_compose_extremes() {
    let before = solid_image(10, 6, BLUE);
    let after = solid_image(10, 6, GREEN);

    let none = compose_split(&before, &after, Boundary::new(0.0)).unwrap();
    assert_eq!(none, after);

    let all = compose_split(&before, &after, Boundary::new(100.0)).unwrap();
    assert_eq!(all, before);
}

#[test]
fn test_compose_midpoint() {
    let before = solid_image(10, 3, BLUE);
    let after = solid_image(10, 3, GREEN);
    let out = compose_split(&before, &after, Boundary::new(50.0)).unwrap();
    assert_eq!(split_column(10, Boundary::new(50.0)), 5);
    for y in 0..3 {
        for x in 0..10 {
            let expected = if x < 5 { BLUE } else { GREEN };
            assert_eq!(out.get_pixel(x, y).0, expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_compose_large_image() {
    let before = common::gradient_image(400, 300);
    let after = solid_image(400, 300, GREEN);
    let out = compose_split(&before, &after, Boundary::new(30.0)).unwrap();
    assert_eq!(out.get_pixel(119, 299), before.get_pixel(119, 299));
    assert_eq!(out.get_pixel(120, 0).0, GREEN);
}

#[test]
fn test_compose_rejects_mismatched_sizes() {
    let before = solid_image(10, 6, BLUE);
    let after = solid_image(12, 6, GREEN);
    assert!(matches!(
        compose_split(&before, &after, Boundary::default()),
        Err(ZenspaceError::DimensionMismatch { .. })
    ));
}
