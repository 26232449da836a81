use hunters_meal::entities::*;
use hunters_meal::geometry::*;
use hunters_meal::Config;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── bounce_offset ─────────────────────────────────────────────────────────────

#[test]
fn bounce_starts_and_ends_on_the_ground() {
    for rate in [1, 6, 10, 18] {
        assert_eq!(bounce_offset(0, rate, 30), 0);
        assert_eq!(bounce_offset(rate, rate, 30), 0);
    }
}

#[test]
fn bounce_peaks_halfway() {
    assert_eq!(bounce_offset(3, 6, 30), 30);
    assert_eq!(bounce_offset(5, 10, 50), 50);
}

#[test]
fn bounce_rounds_to_nearest_pixel() {
    // sin(π/6) · 30 = 15, sin(π/3) · 30 ≈ 25.98
    assert_eq!(bounce_offset(1, 6, 30), 15);
    assert_eq!(bounce_offset(2, 6, 30), 26);
}

proptest! {
    #[test]
    fn bounce_stays_within_height(rate in 1i32..60, height in 0i32..100, frac in 0.0f64..=1.0) {
        let phase = (rate as f64 * frac).round() as i32;
        let offset = bounce_offset(phase, rate, height);
        prop_assert!(offset >= -height && offset <= height);
    }
}

// ── random_velocity ───────────────────────────────────────────────────────────

#[test]
fn velocity_within_speed_range_and_never_zero() {
    let cfg = Config::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut saw_negative = false;
    let mut saw_positive = false;
    for _ in 0..500 {
        let v = random_velocity(&cfg, &mut rng);
        assert!(v != 0);
        assert!((cfg.creature_min_speed..=cfg.creature_max_speed).contains(&v.abs()));
        saw_negative |= v < 0;
        saw_positive |= v > 0;
    }
    assert!(saw_negative && saw_positive);
}

// ── random_off_camera_position ────────────────────────────────────────────────

proptest! {
    #[test]
    fn off_camera_position_never_visible(
        cx in -10_000i32..10_000,
        cy in -10_000i32..10_000,
        w in 1i32..300,
        h in 1i32..300,
        seed in any::<u64>(),
    ) {
        let cfg = Config::default();
        let camera = Camera { x: cx, y: cy };
        let mut rng = StdRng::seed_from_u64(seed);
        let (x, y) = random_off_camera_position(&cfg, camera, w, h, &mut rng);

        prop_assert!(!Rect::new(x, y, w, h).intersects(&viewport(&cfg, camera)));
        prop_assert!(x >= cx - cfg.window_width && x <= cx + 2 * cfg.window_width);
        prop_assert!(y >= cy - cfg.window_height && y <= cy + 2 * cfg.window_height);
    }
}

// ── is_outside_active_area ────────────────────────────────────────────────────

#[test]
fn visible_entity_is_inside() {
    let cfg = Config::default();
    let camera = Camera { x: 100, y: 100 };
    assert!(!is_outside_active_area(&cfg, camera, &Rect::new(200, 200, 10, 10)));
}

#[test]
fn active_area_extends_one_window_each_way() {
    let cfg = Config::default();
    let camera = Camera::default();
    // Active area spans x in [-640, 1280), y in [-480, 960)
    assert!(!is_outside_active_area(&cfg, camera, &Rect::new(1279, 0, 10, 10)));
    assert!(is_outside_active_area(&cfg, camera, &Rect::new(1280, 0, 10, 10)));
    assert!(!is_outside_active_area(&cfg, camera, &Rect::new(-649, 0, 10, 10)));
    assert!(is_outside_active_area(&cfg, camera, &Rect::new(-650, 0, 10, 10)));
    assert!(is_outside_active_area(&cfg, camera, &Rect::new(0, 960, 10, 10)));
    assert!(is_outside_active_area(&cfg, camera, &Rect::new(0, -490, 10, 10)));
}

proptest! {
    #[test]
    fn active_area_test_is_idempotent(
        x in -5_000i32..5_000,
        y in -5_000i32..5_000,
        w in 1i32..300,
        h in 1i32..300,
    ) {
        let cfg = Config::default();
        let camera = Camera { x: 37, y: -12 };
        let rect = Rect::new(x, y, w, h);
        prop_assert_eq!(
            is_outside_active_area(&cfg, camera, &rect),
            is_outside_active_area(&cfg, camera, &rect)
        );
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0, 0, 50, 50);
    let b = Rect::new(40, -10, 5, 100);
    assert_eq!(a.intersects(&b), b.intersects(&a));
    assert!(a.intersects(&b));
}

// ── Hop-adjusted rects ────────────────────────────────────────────────────────

#[test]
fn player_rect_rises_with_bounce() {
    let cfg = Config::default();
    let mut p = Player {
        x: 10,
        y: 100,
        facing: Facing::Left,
        size: 50,
        health: 3,
        score: 0,
        bounce: 0,
        sprite: Sprite { variant: 0, facing: Facing::Left },
    };
    assert_eq!(player_rect(&cfg, &p), Rect::new(10, 100, 50, 50));
    p.bounce = 3;
    assert_eq!(player_rect(&cfg, &p), Rect::new(10, 70, 50, 50));
}
