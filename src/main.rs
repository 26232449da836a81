mod audio;
mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hunters_meal::compute::{init_state, round_finished, tick};
use hunters_meal::entities::{Direction, GameState};
use hunters_meal::player::MoveIntent;
use hunters_meal::{Config, GameError};

use audio::Audio;
use display::Screen;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

#[derive(Parser)]
#[command(version, about = "Eat smaller creatures, dodge bigger ones, grow to win", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "PATH", help = "TOML file overriding game constants")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Seed the RNG for a reproducible session")]
    seed: Option<u64>,

    #[arg(long, value_name = "PATH", help = "Write logs to this file (RUST_LOG sets the level)")]
    log_file: Option<PathBuf>,

    #[arg(short, long, help = "Disable sound cues")]
    mute: bool,
}

fn direction_for(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// What a single key event means to the running round.
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Quit,
    Restart,
    Press(Direction),
    Release(Direction),
    Ignore,
}

/// Quit works in any state; `r` restarts only once the round is won.
fn route_key(code: &KeyCode, kind: KeyEventKind, modifiers: KeyModifiers, won: bool) -> KeyAction {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if is_quit(code, modifiers) {
                KeyAction::Quit
            } else if won && matches!(code, KeyCode::Char('r') | KeyCode::Char('R')) {
                KeyAction::Restart
            } else {
                direction_for(code).map_or(KeyAction::Ignore, KeyAction::Press)
            }
        }
        KeyEventKind::Release => direction_for(code).map_or(KeyAction::Ignore, KeyAction::Release),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum RoundEnd {
    Quit,
    Restart,
}

/// Play one round until it ends or the player quits.
///
/// Input model: `held` records the frame of the last press/repeat event for
/// each direction. Keyboard-enhancement terminals (kitty protocol) send real
/// releases; on classic terminals a direction is released once it has been
/// silent for `HOLD_WINDOW` frames.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
    audio: &Audio,
    rng: &mut StdRng,
) -> std::io::Result<RoundEnd> {
    let mut held: HashMap<Direction, u64> = HashMap::new();
    let mut intent = MoveIntent::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let event = match rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                // Reader thread died: the terminal is gone
                Err(TryRecvError::Disconnected) => return Ok(RoundEnd::Quit),
            };
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };

            match route_key(&code, kind, modifiers, state.won) {
                KeyAction::Quit => return Ok(RoundEnd::Quit),
                KeyAction::Restart => {
                    log::info!("restart requested after win");
                    return Ok(RoundEnd::Restart);
                }
                KeyAction::Press(dir) => {
                    intent.press(dir);
                    held.insert(dir, frame);
                }
                KeyAction::Release(dir) => {
                    intent.release(dir);
                    held.remove(&dir);
                }
                KeyAction::Ignore => {}
            }
        }

        // ── Expire keys on terminals without release events ───────────────────
        held.retain(|dir, last| {
            let fresh = frame.saturating_sub(*last) <= HOLD_WINDOW;
            if !fresh {
                intent.release(*dir);
            }
            fresh
        });

        let now = Instant::now();
        state = tick(&state, &intent, config, now, rng);
        audio.play_all(out, &state.events)?;

        if round_finished(&state, config, now) {
            return Ok(RoundEnd::Restart);
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, config, Screen { cols, rows }, now)?;

        let elapsed = frame_start.elapsed();
        let budget = config.frame_duration();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<(), GameError> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("seeded session: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let audio = Audio::new(cli.mute);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &config, &rx, &audio, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    Ok(())
}

/// Play rounds back to back until the player quits.
fn run<W: Write>(
    out: &mut W,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
    audio: &Audio,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    loop {
        let state = init_state(config, rng);
        audio.play_all(out, &state.events)?;

        match game_loop(out, state, config, rx, audio, rng)? {
            RoundEnd::Quit => break,
            RoundEnd::Restart => continue,
        }
    }
    log::info!("quit");
    Ok(())
}
