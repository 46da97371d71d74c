//! Blockfall terminal runner (default binary).
//!
//! Drives the engine with a fixed-period frame loop: poll input until the next
//! frame is due, tick with the real elapsed time, redraw from the snapshot.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{error, info};

use blockfall::config::{self, AppConfig};
use blockfall::core::{GameState, UniformShapes};
use blockfall::driver::{Driver, Flow};
use blockfall::input::SoftDropLatch;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let config = config::load().context("failed to load configuration")?;
    blockfall::logging::init(&config.log_file)?;

    let seed = config.seed.unwrap_or_else(|| fastrand::u32(..));
    info!(
        seed,
        normal_drop_ms = config.normal_drop_ms,
        fast_drop_ms = config.fast_drop_ms,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, seed: u32) -> Result<()> {
    let game = GameState::with_timing(UniformShapes::new(seed), config.timing());
    let latch = SoftDropLatch::with_timeout_ms(config.soft_drop_release_ms)
        .with_release_events(term.release_events());
    let mut driver = Driver::new(game, latch);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&driver.game().snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match driver.handle_key(key) {
                    Flow::Quit => {
                        info!(score = driver.game().score(), "quit");
                        return Ok(());
                    }
                    Flow::RestartClock => last_tick = Instant::now(),
                    Flow::Continue => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            driver.frame(elapsed_ms);
        }
    }
}
