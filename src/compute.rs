//! Round setup, collision rules, and the per-frame step.
//!
//! Every public function takes an immutable `GameState` (plus the config, the
//! clock reading, and where needed an RNG handle) and returns a brand-new
//! `GameState`. Side effects are limited to the injected RNG.

use std::time::Instant;

use rand::Rng;

use crate::config::Config;
use crate::entities::{Camera, Facing, GameState, GameStatus, SoundCue};
use crate::geometry::{creature_rect, player_rect};
use crate::player::{face, move_player, new_player, MoveIntent};
use crate::spawn::scatter_grass;
use crate::world::update_world;

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the opening state of a round. Creatures arrive on the first step.
pub fn init_state(config: &Config, rng: &mut impl Rng) -> GameState {
    log::info!("new round: size {}, health {}", config.start_size, config.max_health);
    GameState {
        player: new_player(config, rng),
        creatures: Vec::new(),
        grass: scatter_grass(config, rng),
        camera: Camera::default(),
        status: GameStatus::Playing,
        won: false,
        invulnerable_since: None,
        frame: 0,
        events: vec![SoundCue::RoundStart],
    }
}

// ── Growth ────────────────────────────────────────────────────────────────────

/// Size (and score) gained by eating a creature of the given area:
/// `floor(area^0.2) + 1`, computed so exact fifth powers are not lost to
/// floating-point rounding.
pub fn growth_for(area: i32) -> i32 {
    if area <= 0 {
        return 1;
    }
    let area = area as i64;
    let mut root = (area as f64).powf(0.2).floor() as i64;
    while root > 0 && root.pow(5) > area {
        root -= 1;
    }
    while (root + 1).pow(5) <= area {
        root += 1;
    }
    root as i32 + 1
}

// ── Timers ────────────────────────────────────────────────────────────────────

/// Drop invulnerability once it has lasted longer than `invuln_time`.
pub fn expire_invulnerability(state: &GameState, config: &Config, now: Instant) -> GameState {
    match state.invulnerable_since {
        Some(since) if now.saturating_duration_since(since) > config.invuln_duration() => {
            GameState {
                invulnerable_since: None,
                ..state.clone()
            }
        }
        _ => state.clone(),
    }
}

/// True once the game-over banner has been up longer than `game_over_time`.
pub fn round_finished(state: &GameState, config: &Config, now: Instant) -> bool {
    match state.status {
        GameStatus::GameOver { since } => {
            now.saturating_duration_since(since) > config.game_over_duration()
        }
        GameStatus::Playing => false,
    }
}

// ── Collision & progression ───────────────────────────────────────────────────

/// Resolve at most one player/creature overlap.
///
/// Creatures are scanned newest first (reverse insertion order); the first
/// overlapping creature decides the outcome and the scan stops there.
pub fn resolve_collision(state: &GameState, config: &Config, now: Instant) -> GameState {
    let hunter = player_rect(config, &state.player);
    let hit = state
        .creatures
        .iter()
        .enumerate()
        .rev()
        .find(|(_, c)| creature_rect(c).intersects(&hunter))
        .map(|(i, c)| (i, c.area()));

    let Some((index, area)) = hit else {
        return state.clone();
    };

    let size = state.player.size;
    if area <= size * size {
        eat(state, config, index, area)
    } else if !state.is_invulnerable() {
        take_damage(state, now)
    } else {
        state.clone()
    }
}

fn eat(state: &GameState, config: &Config, index: usize, area: i32) -> GameState {
    let mut next = state.clone();
    next.creatures.remove(index);

    if next.player.size <= config.win_size {
        let gain = growth_for(area);
        next.player.size += gain;
        next.player.score += gain as u32;
    }

    if next.player.size > config.win_size && !next.won {
        log::info!(
            "player reached size {} with score {}",
            next.player.size,
            next.player.score
        );
        next.won = true;
        next.events.push(SoundCue::Win);
    }

    next
}

fn take_damage(state: &GameState, now: Instant) -> GameState {
    let mut next = state.clone();
    next.events.push(SoundCue::Damage);
    next.invulnerable_since = Some(now);
    next.player.health -= 1;
    log::debug!("player hit, health now {}", next.player.health);

    if next.player.health == 0 {
        log::info!("game over with score {}", next.player.score);
        next.status = GameStatus::GameOver { since: now };
        next.events.push(SoundCue::Lose);
    }

    next
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the round by one frame: timers, world, player movement, then
/// collisions. All randomness comes through `rng` and the clock through
/// `now`, so tests can drive the step deterministically.
pub fn tick(
    state: &GameState,
    intent: &MoveIntent,
    config: &Config,
    now: Instant,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = expire_invulnerability(state, config, now);
    next.events.clear();
    next.frame += 1;

    let mut next = update_world(&next, config, rng);
    if next.is_game_over() {
        return next;
    }

    if intent.left {
        next.player = face(&next.player, Facing::Left);
    } else if intent.right {
        next.player = face(&next.player, Facing::Right);
    }
    next.player = move_player(config, &next.player, intent);

    resolve_collision(&next, config, now)
}
