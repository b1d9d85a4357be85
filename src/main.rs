mod display;

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_scroller::config::{GameConfig, DEFAULT_CONFIG_PATH};
use side_scroller::error::GameError;
use side_scroller::game::{FrameOutcome, Game};
use side_scroller::input::{InputSnapshot, Key};
use side_scroller::layout::LevelLayouts;

use display::TerminalRenderer;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// A key counts as held if its last press/repeat event arrived within this
/// many frames. Covers terminals that never report key releases; OS key
/// repeat refreshes the entry well before it expires.
const HOLD_WINDOW: u64 = 8;

/// Side-scrolling platformer in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Game configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log output goes here; the terminal is busy drawing the game.
    #[arg(long, value_name = "PATH", default_value = "side_scroller.log")]
    log_file: PathBuf,

    /// Seed for the random source, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Jump),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Shoot),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Key::Confirm),
        KeyCode::Char('1') => Some(Key::Level1),
        KeyCode::Char('2') => Some(Key::Level2),
        KeyCode::Char('3') => Some(Key::Level3),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// Turns the raw terminal event stream into per-frame key state.
///
/// Keyboard-enhanced terminals (kitty protocol) report real releases. Classic
/// terminals only send repeated presses, so a key is released once it has
/// been silent for `HOLD_WINDOW` frames.
#[derive(Default)]
struct KeyTracker {
    last_seen: HashMap<Key, u64>,
    snapshot: InputSnapshot,
}

impl KeyTracker {
    fn poll(&mut self, rx: &mpsc::Receiver<Event>, frame: u64) -> &InputSnapshot {
        self.snapshot.begin_frame();

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            let key = if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                Some(Key::Quit)
            } else {
                map_key(code)
            };
            let Some(key) = key else { continue };

            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.last_seen.insert(key, frame);
                    self.snapshot.press(key);
                }
                KeyEventKind::Release => {
                    self.last_seen.remove(&key);
                    self.snapshot.release(key);
                }
            }
        }

        let expired: HashSet<Key> = self
            .last_seen
            .iter()
            .filter(|(_, &seen)| frame.saturating_sub(seen) > HOLD_WINDOW)
            .map(|(&key, _)| key)
            .collect();
        for key in expired {
            self.last_seen.remove(&key);
            self.snapshot.release(key);
        }

        &self.snapshot
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: Rc<GameConfig>,
    layouts: LevelLayouts,
    rng: &mut StdRng,
) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(config.window.width, config.window.height, cols, rows);
    let mut game = Game::new(config, layouts, &renderer);
    let mut keys = KeyTracker::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let input = keys.poll(rx, frame);
        renderer.clear();
        if game.frame(input, &mut renderer, rng)? == FrameOutcome::Quit {
            break;
        }
        renderer.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    info!("Exited after {frame} frames");
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    // Everything that can fail at startup fails before the terminal is touched.
    let config = Rc::new(GameConfig::load(&cli.config)?);
    let layouts = LevelLayouts::load(&config.level)?;
    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release events; terminals without the protocol ignore this.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, layouts, &mut rng);
    if let Err(e) = &result {
        error!("{e}");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
