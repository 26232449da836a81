//! Bounce animation, random placement, and active-area tests.
//!
//! All randomness comes through an injected `rng` so callers control
//! determinism.

use std::f64::consts::PI;

use rand::Rng;

use crate::config::Config;
use crate::entities::{Camera, Creature, Player, Rect};

/// Placement attempts before falling back to a fixed off-camera spot.
const MAX_PLACEMENT_ATTEMPTS: u32 = 1_000;

/// Vertical hop offset in pixels for a bounce at `phase` out of `rate`.
/// Larger `rate` means a slower hop, larger `height` a higher one.
pub fn bounce_offset(phase: i32, rate: i32, height: i32) -> i32 {
    if rate <= 0 {
        return 0;
    }
    let angle = PI / rate as f64 * phase as f64;
    (angle.sin() * height as f64).round() as i32
}

/// A creature speed in `[min, max]` with a random sign. Never zero.
pub fn random_velocity(config: &Config, rng: &mut impl Rng) -> i32 {
    let speed = rng.gen_range(config.creature_min_speed..=config.creature_max_speed);
    if rng.gen_bool(0.5) {
        speed
    } else {
        -speed
    }
}

pub fn viewport(config: &Config, camera: Camera) -> Rect {
    Rect::new(camera.x, camera.y, config.window_width, config.window_height)
}

/// The 3×3-viewport region centred on the camera view.
pub fn active_area(config: &Config, camera: Camera) -> Rect {
    Rect::new(
        camera.x - config.window_width,
        camera.y - config.window_height,
        config.window_width * 3,
        config.window_height * 3,
    )
}

/// Top-left corner for a `width`×`height` box that lies within one window
/// extent of the camera but outside the visible viewport.
pub fn random_off_camera_position(
    config: &Config,
    camera: Camera,
    width: i32,
    height: i32,
    rng: &mut impl Rng,
) -> (i32, i32) {
    let view = viewport(config, camera);
    let (w, h) = (config.window_width, config.window_height);

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let x = rng.gen_range(camera.x - w..=camera.x + 2 * w);
        let y = rng.gen_range(camera.y - h..=camera.y + 2 * h);
        if !Rect::new(x, y, width, height).intersects(&view) {
            return (x, y);
        }
    }

    log::warn!("off-camera placement gave up after {MAX_PLACEMENT_ATTEMPTS} attempts");
    (camera.x - width, camera.y)
}

/// True when `bounds` no longer touches the active area and may be culled.
pub fn is_outside_active_area(config: &Config, camera: Camera, bounds: &Rect) -> bool {
    !active_area(config, camera).intersects(bounds)
}

/// World-space rect of the player with its hop applied.
pub fn player_rect(config: &Config, player: &Player) -> Rect {
    let hop = bounce_offset(player.bounce, config.bounce_rate, config.bounce_height);
    Rect::new(player.x, player.y - hop, player.size, player.size)
}

/// World-space rect of a creature with its hop applied.
pub fn creature_rect(creature: &Creature) -> Rect {
    let hop = bounce_offset(creature.bounce, creature.bounce_rate, creature.bounce_height);
    Rect::new(creature.x, creature.y - hop, creature.width, creature.height)
}
