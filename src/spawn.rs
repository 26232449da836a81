//! Factories for creatures and grass.

use rand::Rng;

use crate::config::Config;
use crate::entities::{
    Camera, Creature, Facing, Grass, Sprite, GRASS_VARIANTS, SPRITE_VARIANTS,
};
use crate::geometry::{random_off_camera_position, random_velocity};

/// Grass tiles scattered over the first screen when a round opens.
pub const INITIAL_GRASS: usize = 10;

/// The image shown for a given horizontal heading.
///
/// The source art is mirrored: a creature moving left is drawn with the
/// right-facing image and vice versa.
pub fn sprite_for_heading(variant: usize, movex: i32) -> Sprite {
    let facing = if movex < 0 { Facing::Right } else { Facing::Left };
    Sprite { variant, facing }
}

pub fn make_creature(config: &Config, camera: Camera, rng: &mut impl Rng) -> Creature {
    let variant = rng.gen_range(0..SPRITE_VARIANTS);
    let general_size = rng.gen_range(5..=25);
    let multiplier = rng.gen_range(1..=6);
    let width = (general_size + rng.gen_range(0..=10)) * multiplier;
    let height = (general_size + rng.gen_range(0..=10)) * multiplier;

    let (x, y) = random_off_camera_position(config, camera, width, height, rng);
    let movex = random_velocity(config, rng);
    let movey = random_velocity(config, rng);

    Creature {
        x,
        y,
        movex,
        movey,
        width,
        height,
        bounce: 0,
        bounce_rate: rng.gen_range(10..=18),
        bounce_height: rng.gen_range(10..=50),
        sprite: sprite_for_heading(variant, movex),
    }
}

pub fn make_grass(config: &Config, camera: Camera, rng: &mut impl Rng) -> Grass {
    let image = rng.gen_range(0..GRASS_VARIANTS);
    let (width, height) = (config.grass_width, config.grass_height);
    let (x, y) = random_off_camera_position(config, camera, width, height, rng);
    Grass {
        x,
        y,
        width,
        height,
        image,
    }
}

/// Grass strewn across the opening viewport so the first frame is not bare.
pub fn scatter_grass(config: &Config, rng: &mut impl Rng) -> Vec<Grass> {
    (0..INITIAL_GRASS)
        .map(|_| {
            let tile = make_grass(config, Camera::default(), rng);
            Grass {
                x: rng.gen_range(0..=config.window_width),
                y: rng.gen_range(0..=config.window_height),
                ..tile
            }
        })
        .collect()
}
