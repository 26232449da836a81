use hunters_meal::entities::*;
use hunters_meal::player::*;
use hunters_meal::Config;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_player() -> Player {
    let cfg = Config::default();
    new_player(&cfg, &mut StdRng::seed_from_u64(3))
}

// ── MoveIntent ────────────────────────────────────────────────────────────────

#[test]
fn press_clears_the_opposite_direction() {
    let mut intent = MoveIntent::default();
    intent.press(Direction::Left);
    intent.press(Direction::Right);
    assert!(intent.right && !intent.left);

    intent.press(Direction::Up);
    intent.press(Direction::Down);
    assert!(intent.down && !intent.up);
    // Horizontal and vertical combine
    assert!(intent.right);
}

#[test]
fn release_only_clears_that_direction() {
    let mut intent = MoveIntent::default();
    intent.press(Direction::Left);
    intent.press(Direction::Up);
    intent.release(Direction::Left);
    assert!(!intent.left && intent.up);
    intent.release(Direction::Down);
    assert!(intent.up);
    intent.release(Direction::Up);
    assert!(!intent.is_moving());
}

// ── new_player ────────────────────────────────────────────────────────────────

#[test]
fn new_player_uses_config() {
    let cfg = Config {
        start_size: 20,
        max_health: 5,
        ..Config::default()
    };
    let p = new_player(&cfg, &mut StdRng::seed_from_u64(0));
    assert_eq!(p.size, 20);
    assert_eq!(p.health, 5);
    assert_eq!(p.score, 0);
    assert_eq!(p.bounce, 0);
    assert!(p.sprite.variant < SPRITE_VARIANTS);
}

// ── move_player ───────────────────────────────────────────────────────────────

#[test]
fn idle_player_stays_put() {
    let cfg = Config::default();
    let p = make_player();
    let p2 = move_player(&cfg, &p, &MoveIntent::default());
    assert_eq!((p2.x, p2.y, p2.bounce), (p.x, p.y, 0));
}

#[test]
fn diagonal_is_not_normalised() {
    let cfg = Config::default();
    let p = make_player();
    let intent = MoveIntent { down: true, left: true, ..Default::default() };
    let p2 = move_player(&cfg, &p, &intent);
    assert_eq!(p2.x, p.x - 9);
    assert_eq!(p2.y, p.y + 9);
}

#[test]
fn bounce_finishes_after_keys_released() {
    let cfg = Config::default();
    let moving = MoveIntent { right: true, ..Default::default() };
    let mut p = move_player(&cfg, &make_player(), &moving);
    assert_eq!(p.bounce, 1);

    let idle = MoveIntent::default();
    let mut phases = Vec::new();
    for _ in 0..6 {
        p = move_player(&cfg, &p, &idle);
        phases.push(p.bounce);
    }
    assert_eq!(phases, vec![2, 3, 4, 5, 6, 0]);

    p = move_player(&cfg, &p, &idle);
    assert_eq!(p.bounce, 0);
}

// ── face ──────────────────────────────────────────────────────────────────────

#[test]
fn turning_swaps_to_mirrored_sprite() {
    let p = make_player();
    let turned = face(&p, Facing::Right);
    assert_eq!(turned.facing, Facing::Right);
    assert_eq!(turned.sprite, p.sprite.mirrored());
    assert_eq!(turned.sprite.variant, p.sprite.variant);

    let back = face(&turned, Facing::Left);
    assert_eq!(back.sprite, p.sprite);
}

#[test]
fn facing_same_way_changes_nothing() {
    let p = make_player();
    let same = face(&p, Facing::Left);
    assert_eq!(same.sprite, p.sprite);
    assert_eq!(same.facing, Facing::Left);
}
