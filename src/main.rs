//! Terminal snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_snake::term`. The engine is ticked by a `TickPacer`, and input is
//! polled in between with a timeout that ends at the next tick.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::config::GameConfig;
use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, TickPacer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env().parse_args(&args)?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route tracing output to the configured file. Without one, logging stays off.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tui_snake=info,tui_snake_core=info".into()),
        )
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::with_board(config.board(), config.seed);
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        "starting"
    );

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = TickPacer::new();
    let mut episode = game.episode_id();

    let clock = Instant::now();
    let now_ns = || clock.elapsed().as_nanos() as u64;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = pacer.time_until_next(now_ns(), game.speed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // A fresh episode gets its first tick right away.
        if game.episode_id() != episode {
            episode = game.episode_id();
            pacer.restart();
        }

        // Tick. Speed is re-read every cycle.
        if pacer.should_tick(now_ns(), game.speed()) {
            game.tick();
        }
    }
}
