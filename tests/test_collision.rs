mod common;

use common::seeded_rng;
use side_scroller::camera::Camera;
use side_scroller::input::{InputSnapshot, InputSource, Key, KeyLatch};
use side_scroller::object::{circles_overlap, rects_overlap, Body, Patrol, Sprite};

fn body(x: f64, y: f64, w: f64, h: f64, radius: Option<f64>) -> Body {
    Body::new(x, y, &Sprite::new("test", w, h), radius, 0.0)
}

// ── Shapes ────────────────────────────────────────────────────────────────────

#[test]
fn body_edges_are_relative_to_centre() {
    let b = body(100.0, 50.0, 40.0, 20.0, None);
    assert_eq!(b.left(), 80.0);
    assert_eq!(b.right(), 120.0);
    assert_eq!(b.top(), 40.0);
    assert_eq!(b.bottom(), 60.0);
}

#[test]
fn circles_touching_exactly_do_not_overlap() {
    let a = body(0.0, 0.0, 20.0, 20.0, Some(10.0));
    let b = body(20.0, 0.0, 20.0, 20.0, Some(10.0));
    assert!(!circles_overlap(&a, 10.0, &b, 10.0));
    assert!(!a.overlaps(&b));

    let c = body(19.9, 0.0, 20.0, 20.0, Some(10.0));
    assert!(a.overlaps(&c));
}

#[test]
fn circle_test_uses_euclidean_distance() {
    // 3-4-5 triangle scaled: centres 25 apart, radii sum 24
    let a = body(0.0, 0.0, 10.0, 10.0, Some(12.0));
    let b = body(15.0, 20.0, 10.0, 10.0, Some(12.0));
    assert!(!a.overlaps(&b));

    let c = body(15.0, 20.0, 10.0, 10.0, Some(14.0));
    assert!(a.overlaps(&c));
}

#[test]
fn rects_touching_edges_overlap() {
    let a = body(0.0, 0.0, 20.0, 20.0, None);
    let b = body(20.0, 0.0, 20.0, 20.0, None);
    assert!(rects_overlap(&a, &b));
    assert!(rects_overlap(&b, &a));

    let c = body(20.1, 0.0, 20.0, 20.0, None);
    assert!(!a.overlaps(&c));
}

#[test]
fn rect_test_is_symmetric_when_one_contains_the_other() {
    let big = body(0.0, 0.0, 200.0, 200.0, None);
    let small = body(10.0, 10.0, 5.0, 5.0, None);
    assert!(big.overlaps(&small));
    assert!(small.overlaps(&big));
}

#[test]
fn missing_radius_on_either_side_falls_back_to_rects() {
    // Circles would not touch (distance 28 > 10 + 10) but the boxes do.
    let round = body(0.0, 0.0, 60.0, 60.0, Some(10.0));
    let square = body(28.0, 0.0, 20.0, 20.0, None);
    assert!(round.overlaps(&square));
    assert!(square.overlaps(&round));
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[test]
fn patrol_reverses_past_the_band_edge() {
    let mut rng = seeded_rng();
    let mut patrol = Patrol::new(100.0, 1.0, 5.0, &mut rng);
    let start = patrol.direction();

    let mut x = 100.0;
    for _ in 0..6 {
        x = patrol.step(x);
    }
    // Six steps of one pixel leave the ±5 band and flip the direction.
    assert_eq!((x - 100.0).abs(), 6.0);
    assert_eq!(patrol.direction(), -start);

    for _ in 0..6 {
        x = patrol.step(x);
    }
    assert_eq!(x, 100.0);
}

#[test]
fn patrol_stays_near_origin() {
    let mut rng = seeded_rng();
    let mut patrol = Patrol::new(0.0, 2.0, 50.0, &mut rng);
    let mut x = 0.0;
    for _ in 0..1000 {
        x = patrol.step(x);
        assert!(x.abs() <= 52.0);
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

#[test]
fn camera_clamps_to_boundary() {
    let mut camera = Camera::new(0.0, 0.0, 1024.0, 768.0);
    camera.set_boundary_x(0.0, 6000.0);

    camera.set_x(-50.0);
    assert_eq!(camera.x(), 0.0);

    camera.set_x(5500.0);
    assert_eq!(camera.x(), 6000.0 - 1024.0);
    assert_eq!(camera.right(), 6000.0);

    camera.set_x(300.0);
    assert_eq!(camera.x(), 300.0);
}

#[test]
fn camera_without_boundary_moves_freely() {
    let mut camera = Camera::new(0.0, 0.0, 100.0, 100.0);
    camera.set_x(-500.0);
    assert_eq!(camera.x(), -500.0);
}

#[test]
fn camera_translates_world_to_screen() {
    let mut camera = Camera::new(0.0, 0.0, 1024.0, 768.0);
    camera.set_x(250.0);
    assert_eq!(camera.to_screen(300.0, 40.0), (50.0, 40.0));
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[test]
fn snapshot_tracks_edges_per_frame() {
    let mut input = InputSnapshot::new();
    input.press(Key::Jump);
    assert!(input.is_down(Key::Jump));
    assert!(input.was_pressed(Key::Jump));

    input.begin_frame();
    assert!(input.is_down(Key::Jump));
    assert!(!input.was_pressed(Key::Jump));

    input.release(Key::Jump);
    assert!(input.is_up(Key::Jump));
    assert!(input.was_released(Key::Jump));

    input.begin_frame();
    assert!(!input.was_released(Key::Jump));
}

#[test]
fn pressing_a_held_key_is_not_a_new_edge() {
    let mut input = InputSnapshot::new().with(Key::Shoot);
    input.begin_frame();
    input.press(Key::Shoot);
    assert!(!input.was_pressed(Key::Shoot));
}

#[test]
fn latch_fires_once_per_hold() {
    let mut latch = KeyLatch::default();
    assert!(latch.trigger(true));
    assert!(!latch.trigger(true));
    assert!(!latch.trigger(false));
    assert!(latch.trigger(true));
}
