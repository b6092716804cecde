use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_defaults() {
    let vp = Viewport::default();
    assert_eq!(vp.pan, Point::ORIGIN);
    assert_eq!(vp.zoom, 0.5);
}

#[test]
fn test_zoom_steps() {
    let mut vp = Viewport::default();
    assert!(close(vp.zoom_in(), 0.6));
    assert!(close(vp.zoom_out(), 0.5));
    assert!(close(vp.zoom_out(), 0.4));
}

#[test]
fn test_zoom_clamps_silently() {
    let mut vp = Viewport::default();
    for _ in 0..30 {
        vp.zoom_in();
    }
    assert_eq!(vp.zoom, 2.0);
    for _ in 0..30 {
        vp.zoom_out();
    }
    assert_eq!(vp.zoom, 0.2);
    assert_eq!(vp.set_zoom(-4.0), 0.2);
}

#[test]
fn test_reset() {
    let mut vp = Viewport::default();
    vp.zoom_in();
    vp.pan_to(Point::ORIGIN, Point::new(40.0, -10.0));
    vp.reset();
    assert_eq!(vp.pan, Point::ORIGIN);
    assert_eq!(vp.zoom, 0.5);
}

#[test]
fn test_pan_not_scaled_by_zoom() {
    let mut vp = Viewport::default();
    vp.set_zoom(2.0);
    vp.pan_to(Point::new(10.0, 10.0), Point::new(30.0, 40.0));
    assert_eq!(vp.pan, Point::new(40.0, 50.0));
}

#[test]
fn test_world_screen_round_trip() {
    let mut vp = Viewport::default();
    vp.pan_to(Point::ORIGIN, Point::new(20.0, 30.0));
    let world = Point::new(100.0, 200.0);
    let screen = vp.world_to_screen(world);
    assert_eq!(screen, Point::new(70.0, 130.0));
    assert_eq!(vp.screen_to_world(screen), world);
}

#[test]
fn test_default_zoom_outside_bounds_is_clamped() {
    let vp = Viewport::new(ViewportConfig {
        default_zoom: 0.0,
        ..ViewportConfig::default()
    });
    assert_eq!(vp.zoom, 0.2);
    assert!(vp.screen_to_world(Point::new(10.0, 10.0)).x.is_finite());
}

#[test]
fn test_inverted_bounds_do_not_panic() {
    let mut vp = Viewport::new(ViewportConfig {
        min_zoom: 3.0,
        max_zoom: 1.0,
        ..ViewportConfig::default()
    });
    vp.zoom_in();
    vp.zoom_out();
    assert!(vp.zoom > 0.0 && vp.zoom.is_finite());

    let mut vp = Viewport::new(ViewportConfig {
        min_zoom: f64::NAN,
        max_zoom: f64::NAN,
        default_zoom: 0.0,
        ..ViewportConfig::default()
    });
    assert_eq!(vp.zoom, 1.0);
    assert!(close(vp.zoom_in(), 1.1));
}
