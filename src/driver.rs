//! Driver: feeds terminal key events and frame time into the engine.
//!
//! This is the presentation-side glue between `crossterm` events and
//! [`GameState`]. It holds no game rules; it only decides which command a key
//! means and when the frame clock must restart.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::{GameState, ShapeSource, TickOutcome, UniformShapes};
use crate::input::{is_soft_drop_key, map_key_press, should_quit, SoftDropLatch};
use crate::types::{Command, RunState};

/// What the caller should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The game (re)started running; measure the next frame from now.
    RestartClock,
    Quit,
}

pub struct Driver<S = UniformShapes> {
    game: GameState<S>,
    soft_drop: SoftDropLatch,
}

impl<S: ShapeSource> Driver<S> {
    pub fn new(game: GameState<S>, soft_drop: SoftDropLatch) -> Self {
        Self { game, soft_drop }
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.key_down(key),
            KeyEventKind::Release => {
                if is_soft_drop_key(key.code) {
                    if let Some(cmd) = self.soft_drop.release() {
                        self.game.handle_command(cmd);
                    }
                }
                Flow::Continue
            }
        }
    }

    fn key_down(&mut self, key: KeyEvent) -> Flow {
        if should_quit(key) {
            return Flow::Quit;
        }

        if is_soft_drop_key(key.code) {
            if self.game.state() == RunState::Running {
                if let Some(cmd) = self.soft_drop.press() {
                    self.game.handle_command(cmd);
                }
            }
            return Flow::Continue;
        }

        let Some(cmd) = map_key_press(key) else {
            return Flow::Continue;
        };
        // Pause and reset are toggles; terminal auto-repeat must not flip them back.
        if key.kind == KeyEventKind::Repeat
            && matches!(cmd, Command::PauseToggle | Command::Reset)
        {
            return Flow::Continue;
        }

        let before = self.game.state();
        self.game.handle_command(cmd);

        match cmd {
            Command::Reset => {
                self.soft_drop.reset();
                Flow::RestartClock
            }
            Command::PauseToggle => {
                if before == RunState::Paused && self.game.state() == RunState::Running {
                    self.sync_soft_drop();
                    Flow::RestartClock
                } else {
                    Flow::Continue
                }
            }
            _ => Flow::Continue,
        }
    }

    /// Advance one frame. Does nothing unless the game is running.
    pub fn frame(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.game.state() != RunState::Running {
            return TickOutcome::Idle;
        }
        if let Some(cmd) = self.soft_drop.update(elapsed_ms) {
            self.game.handle_command(cmd);
        }
        self.game.tick(elapsed_ms)
    }

    /// A release seen while paused was ignored by the engine; catch up.
    fn sync_soft_drop(&mut self) {
        if self.game.soft_drop() != self.soft_drop.held() {
            let cmd = if self.soft_drop.held() {
                Command::SoftDropOn
            } else {
                Command::SoftDropOff
            };
            self.game.handle_command(cmd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeSequence;
    use crate::types::{ShapeKind, FAST_DROP_MS, NORMAL_DROP_MS};
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn driver() -> Driver<ShapeSequence> {
        let game = GameState::new(ShapeSequence::repeat(ShapeKind::T));
        Driver::new(game, SoftDropLatch::with_timeout_ms(100))
    }

    #[test]
    fn test_soft_drop_press_and_release() {
        let mut d = driver();
        d.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        assert_eq!(d.game().drop_interval_ms(), FAST_DROP_MS);

        d.handle_key(key(KeyCode::Down, KeyEventKind::Release));
        assert_eq!(d.game().drop_interval_ms(), NORMAL_DROP_MS);
    }

    #[test]
    fn test_soft_drop_times_out_without_release() {
        let mut d = driver();
        d.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        d.frame(60);
        assert!(d.game().soft_drop());
        d.frame(60);
        assert!(!d.game().soft_drop());
    }

    #[test]
    fn test_release_during_pause_applies_on_resume() {
        let mut d = driver();
        d.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        d.handle_key(key(KeyCode::Esc, KeyEventKind::Press));
        d.handle_key(key(KeyCode::Down, KeyEventKind::Release));
        assert!(d.game().soft_drop());

        assert_eq!(
            d.handle_key(key(KeyCode::Esc, KeyEventKind::Press)),
            Flow::RestartClock
        );
        assert!(!d.game().soft_drop());
    }

    #[test]
    fn test_repeat_does_not_toggle_pause() {
        let mut d = driver();
        d.handle_key(key(KeyCode::Char('p'), KeyEventKind::Press));
        d.handle_key(key(KeyCode::Char('p'), KeyEventKind::Repeat));
        assert!(d.game().paused());
    }

    #[test]
    fn test_frame_skipped_while_paused() {
        let mut d = driver();
        d.handle_key(key(KeyCode::Esc, KeyEventKind::Press));
        assert_eq!(d.frame(10_000), TickOutcome::Idle);
        assert_eq!(d.game().active().y, 0);
    }

    #[test]
    fn test_moves_and_quit() {
        let mut d = driver();
        let x = d.game().active().x;
        d.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        d.handle_key(key(KeyCode::Left, KeyEventKind::Repeat));
        assert_eq!(d.game().active().x, x - 2);

        assert_eq!(
            d.handle_key(key(KeyCode::Char('q'), KeyEventKind::Press)),
            Flow::Quit
        );
    }
}
