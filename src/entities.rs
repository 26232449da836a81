//! All game entity types. Pure data, no rules.

use std::time::Instant;

/// Number of sprite variants a player or creature may be drawn with.
pub const SPRITE_VARIANTS: usize = 4;
/// Number of decorative grass images.
pub const GRASS_VARIANTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Which image a sprite-bearing entity is drawn with: one of the
/// `SPRITE_VARIANTS` base images, in its left- or right-facing form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub variant: usize,
    pub facing: Facing,
}

impl Sprite {
    pub fn mirrored(self) -> Self {
        Sprite {
            facing: self.facing.flipped(),
            ..self
        }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world pixels; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap. Rects that only share an edge do not intersect, and
    /// an empty rect intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Top-left world coordinate of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
}

// ── Player & creatures ────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
    /// Width and height; the player is always square.
    pub size: i32,
    pub health: i32,
    pub score: u32,
    /// 0 means standing; counts up to the configured bounce rate.
    pub bounce: i32,
    pub sprite: Sprite,
}

impl Player {
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.size / 2, self.y + self.size / 2)
    }
}

#[derive(Clone, Debug)]
pub struct Creature {
    pub x: i32,
    pub y: i32,
    pub movex: i32,
    pub movey: i32,
    pub width: i32,
    pub height: i32,
    pub bounce: i32,
    pub bounce_rate: i32,
    pub bounce_height: i32,
    /// Image currently displayed, one of `sprite_variants()`.
    pub sprite: Sprite,
}

impl Creature {
    /// Mass used when comparing against the player.
    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Left- and right-facing forms of this creature's image.
    pub fn sprite_variants(&self) -> (Sprite, Sprite) {
        let variant = self.sprite.variant;
        (
            Sprite { variant, facing: Facing::Left },
            Sprite { variant, facing: Facing::Right },
        )
    }

    /// Bounds ignoring the hop offset; used for culling.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug)]
pub struct Grass {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Index into the decorative grass images.
    pub image: usize,
}

impl Grass {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Round state ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Health ran out at `since`; the round ends once the banner times out.
    GameOver { since: Instant },
}

/// Fire-and-forget audio triggers produced by a simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    RoundStart,
    Damage,
    Win,
    Lose,
}

/// The entire round. Cloneable so the per-frame step can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Live creatures in insertion order.
    pub creatures: Vec<Creature>,
    /// Live grass tiles in insertion order.
    pub grass: Vec<Grass>,
    pub camera: Camera,
    pub status: GameStatus,
    /// Latched once the player outgrows the win size.
    pub won: bool,
    pub invulnerable_since: Option<Instant>,
    pub frame: u64,
    /// Sound cues raised by the most recent step.
    pub events: Vec<SoundCue>,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_since.is_some()
    }
}
