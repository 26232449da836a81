//! Rendering layer. All terminal output lives here.
//!
//! The world is measured in pixels; each frame the camera viewport is scaled
//! onto the terminal grid. No game logic is performed; this module only
//! translates state into terminal commands.

use std::io::Write;
use std::time::Instant;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use hunters_meal::entities::{Camera, Facing, GameState, Rect, Sprite};
use hunters_meal::geometry::{creature_rect, player_rect};
use hunters_meal::Config;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GRASS: Color = Color::DarkGreen;
const C_PLAYER: Color = Color::Yellow;
const C_HUD_SCORE: Color = Color::White;
const C_HEALTH_FULL: Color = Color::Red;
const C_HEALTH_EMPTY: Color = Color::White;
const C_BANNER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Creature tint per sprite variant.
const C_CREATURES: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Blue, Color::DarkYellow];

const GRASS_GLYPHS: [&str; 4] = ["\"", "ψ", ",", "w"];

/// Terminal grid the viewport is projected onto.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub cols: u16,
    pub rows: u16,
}

/// A rect in terminal cells, already clipped to the screen.
struct CellRect {
    left: u16,
    top: u16,
    right: u16,
    bottom: u16,
}

impl Screen {
    /// Project a world rect through the camera, or `None` if it is off-screen.
    fn project(&self, config: &Config, camera: Camera, rect: &Rect) -> Option<CellRect> {
        let sx = |px: i32| (px - camera.x) as i64 * self.cols as i64 / config.window_width as i64;
        let sy = |py: i32| (py - camera.y) as i64 * self.rows as i64 / config.window_height as i64;

        let left = sx(rect.x);
        let top = sy(rect.y);
        let right = sx(rect.right()).max(left + 1);
        let bottom = sy(rect.bottom()).max(top + 1);

        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(self.cols as i64);
        let bottom = bottom.min(self.rows as i64);
        if left >= right || top >= bottom {
            return None;
        }

        Some(CellRect {
            left: left as u16,
            top: top as u16,
            right: right as u16,
            bottom: bottom as u16,
        })
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    config: &Config,
    screen: Screen,
    now: Instant,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for tile in &state.grass {
        draw_grass(out, screen.project(config, state.camera, &tile.bounds()), tile.image)?;
    }

    for creature in &state.creatures {
        let cells = screen.project(config, state.camera, &creature_rect(creature));
        draw_body(out, cells, creature.sprite, C_CREATURES[creature.sprite.variant % 4], '▓')?;
    }

    if player_visible(state, now) {
        let cells = screen.project(config, state.camera, &player_rect(config, &state.player));
        draw_body(out, cells, state.player.sprite, C_PLAYER, '█')?;
    }

    draw_health_meter(out, state, config)?;
    draw_score(out, state, screen)?;
    draw_controls_hint(out, screen)?;

    if state.is_game_over() {
        draw_banner(out, screen, &[("Game Over", C_BANNER)])?;
    }
    if state.won {
        draw_banner(
            out,
            screen,
            &[
                ("You have achieved Maximum Size!", C_BANNER),
                ("(Press \"r\" to restart.)", C_BANNER),
            ],
        )?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Hidden once the round is lost, and blinking every tenth of a second while
/// invulnerable.
fn player_visible(state: &GameState, now: Instant) -> bool {
    if state.is_game_over() {
        return false;
    }
    match state.invulnerable_since {
        Some(since) => (now.saturating_duration_since(since).as_millis() / 100) % 2 == 0,
        None => true,
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_grass<W: Write>(out: &mut W, cells: Option<CellRect>, image: usize) -> std::io::Result<()> {
    let Some(cells) = cells else {
        return Ok(());
    };
    let glyph = GRASS_GLYPHS[image % GRASS_GLYPHS.len()];
    let width = (cells.right - cells.left) as usize;

    // Tufts sit on the bottom row of the tile
    out.queue(cursor::MoveTo(cells.left, cells.bottom - 1))?;
    out.queue(style::SetForegroundColor(C_GRASS))?;
    out.queue(Print(glyph.repeat(width)))?;
    Ok(())
}

/// Fill a creature-shaped block and mark the eye on the side its image faces.
fn draw_body<W: Write>(
    out: &mut W,
    cells: Option<CellRect>,
    sprite: Sprite,
    color: Color,
    fill: char,
) -> std::io::Result<()> {
    let Some(cells) = cells else {
        return Ok(());
    };
    let width = (cells.right - cells.left) as usize;
    let row: String = std::iter::repeat(fill).take(width).collect();

    out.queue(style::SetForegroundColor(color))?;
    for y in cells.top..cells.bottom {
        out.queue(cursor::MoveTo(cells.left, y))?;
        out.queue(Print(&row))?;
    }

    let eye_x = match sprite.facing {
        Facing::Left => cells.left,
        Facing::Right => cells.right - 1,
    };
    out.queue(cursor::MoveTo(eye_x, cells.top))?;
    out.queue(style::SetForegroundColor(Color::Black))?;
    out.queue(style::SetBackgroundColor(color))?;
    out.queue(Print("o"))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_health_meter<W: Write>(
    out: &mut W,
    state: &GameState,
    config: &Config,
) -> std::io::Result<()> {
    let health = state.player.health.max(0) as usize;
    let missing = (config.max_health.max(0) as usize).saturating_sub(health);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HEALTH_FULL))?;
    out.queue(Print("■".repeat(health)))?;
    out.queue(style::SetForegroundColor(C_HEALTH_EMPTY))?;
    out.queue(Print("□".repeat(missing)))?;
    Ok(())
}

fn draw_score<W: Write>(out: &mut W, state: &GameState, screen: Screen) -> std::io::Result<()> {
    let text = format!("SCORE: {}", state.player.score);
    let x = screen.cols.saturating_sub(text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&text))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows / WASD : Move   Esc / Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, screen: Screen, lines: &[(&str, Color)]) -> std::io::Result<()> {
    let cx = screen.cols / 2;
    let start_row = (screen.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
