//! Player creation, movement intent, and movement.

use rand::Rng;

use crate::config::Config;
use crate::entities::{Direction, Facing, Player, Sprite, SPRITE_VARIANTS};

/// Directions currently held. Opposite directions are mutually exclusive;
/// a horizontal and a vertical direction may be held together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn press(&mut self, dir: Direction) {
        self.set(dir.opposite(), false);
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }
}

/// A fresh player in the middle of the first screen, facing left.
pub fn new_player(config: &Config, rng: &mut impl Rng) -> Player {
    Player {
        x: config.half_width(),
        y: config.half_height(),
        facing: Facing::Left,
        size: config.start_size,
        health: config.max_health,
        score: 0,
        bounce: 0,
        sprite: Sprite {
            variant: rng.gen_range(0..SPRITE_VARIANTS),
            facing: Facing::Left,
        },
    }
}

/// Turn the player, swapping to the mirrored image when the facing changes.
pub fn face(player: &Player, facing: Facing) -> Player {
    if player.facing == facing {
        return player.clone();
    }
    Player {
        facing,
        sprite: player.sprite.mirrored(),
        ..player.clone()
    }
}

/// Apply one frame of held movement. Diagonals are not normalised.
///
/// The hop keeps running after keys are released until it completes.
pub fn move_player(config: &Config, player: &Player, intent: &MoveIntent) -> Player {
    let mut next = player.clone();

    if intent.left {
        next.x -= config.move_rate;
    }
    if intent.right {
        next.x += config.move_rate;
    }
    if intent.up {
        next.y -= config.move_rate;
    }
    if intent.down {
        next.y += config.move_rate;
    }

    if intent.is_moving() || next.bounce != 0 {
        next.bounce += 1;
    }
    if next.bounce > config.bounce_rate {
        next.bounce = 0;
    }

    next
}
