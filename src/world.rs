//! Population bookkeeping for creatures and grass, plus the dead-zone camera.
//!
//! Every public function takes immutable inputs and returns fresh values.

use rand::Rng;

use crate::config::Config;
use crate::entities::{Camera, Creature, GameState, Grass, Player};
use crate::geometry::{is_outside_active_area, random_velocity};
use crate::spawn::{make_creature, make_grass, sprite_for_heading};

// ── Creature motion ───────────────────────────────────────────────────────────

/// Move every creature one frame, advance its hop, and occasionally give it a
/// new heading.
pub fn advance_creatures(
    config: &Config,
    creatures: &[Creature],
    rng: &mut impl Rng,
) -> Vec<Creature> {
    creatures
        .iter()
        .map(|c| {
            let mut next = Creature {
                x: c.x + c.movex,
                y: c.y + c.movey,
                bounce: if c.bounce + 1 > c.bounce_rate { 0 } else { c.bounce + 1 },
                ..c.clone()
            };

            if rng.gen_range(0..100) < config.dir_change_freq {
                next.movex = random_velocity(config, rng);
                next.movey = random_velocity(config, rng);
                next.sprite = sprite_for_heading(next.sprite.variant, next.movex);
            }

            next
        })
        .collect()
}

// ── Culling & replenishment ───────────────────────────────────────────────────

pub fn cull_creatures(config: &Config, camera: Camera, creatures: &[Creature]) -> Vec<Creature> {
    creatures
        .iter()
        .filter(|c| !is_outside_active_area(config, camera, &c.bounds()))
        .cloned()
        .collect()
}

pub fn cull_grass(config: &Config, camera: Camera, grass: &[Grass]) -> Vec<Grass> {
    grass
        .iter()
        .filter(|g| !is_outside_active_area(config, camera, &g.bounds()))
        .cloned()
        .collect()
}

/// Top the creature population back up to its target, spawning off-camera.
pub fn replenish_creatures(
    config: &Config,
    camera: Camera,
    mut creatures: Vec<Creature>,
    rng: &mut impl Rng,
) -> Vec<Creature> {
    while creatures.len() < config.num_creatures {
        creatures.push(make_creature(config, camera, rng));
    }
    creatures
}

pub fn replenish_grass(
    config: &Config,
    camera: Camera,
    mut grass: Vec<Grass>,
    rng: &mut impl Rng,
) -> Vec<Grass> {
    while grass.len() < config.num_grass {
        grass.push(make_grass(config, camera, rng));
    }
    grass
}

// ── Camera ────────────────────────────────────────────────────────────────────

/// Scroll the camera only once the player's center is more than
/// `camera_slack` pixels from the viewport center; then keep it exactly
/// `camera_slack` away.
pub fn follow_player(config: &Config, camera: Camera, player: &Player) -> Camera {
    let (px, py) = player.center();
    Camera {
        x: follow_axis(camera.x, px, config.half_width(), config.camera_slack),
        y: follow_axis(camera.y, py, config.half_height(), config.camera_slack),
    }
}

fn follow_axis(camera: i32, center: i32, half_extent: i32, slack: i32) -> i32 {
    if (camera + half_extent) - center > slack {
        center + slack - half_extent
    } else if center - (camera + half_extent) > slack {
        center - slack - half_extent
    } else {
        camera
    }
}

// ── Per-frame world step ──────────────────────────────────────────────────────

/// Advance creatures, drop everything that wandered out of the active area,
/// refill both populations, then move the camera.
pub fn update_world(state: &GameState, config: &Config, rng: &mut impl Rng) -> GameState {
    let camera = state.camera;

    let creatures = advance_creatures(config, &state.creatures, rng);

    let grass = cull_grass(config, camera, &state.grass);
    let creatures = cull_creatures(config, camera, &creatures);
    let culled = (state.creatures.len() - creatures.len()) + (state.grass.len() - grass.len());

    let grass = replenish_grass(config, camera, grass, rng);
    let creatures = replenish_creatures(config, camera, creatures, rng);
    if culled > 0 {
        log::debug!("frame {}: recycled {} off-screen entities", state.frame, culled);
    }

    GameState {
        creatures,
        grass,
        camera: follow_player(config, camera, &state.player),
        ..state.clone()
    }
}
