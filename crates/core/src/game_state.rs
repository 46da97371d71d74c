//! Game state module - the engine that owns a single game
//!
//! This module ties together the board, the shape catalog and the shape
//! source. It handles gravity timing, piece movement, rotation, locking,
//! line clears, scoring and the running/paused/game-over lifecycle.
//!
//! The engine never schedules itself: the caller drives it with
//! [`GameState::tick`] and [`GameState::handle_command`], then reads a
//! [`GameSnapshot`] to redraw.

use tracing::{debug, info};

use crate::board::Board;
use crate::rng::{ShapeSource, UniformShapes};
use crate::scoring::line_clear_points;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, RunState, BOARD_WIDTH, FAST_DROP_MS, NORMAL_DROP_MS};

/// Gravity intervals in milliseconds per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropTiming {
    pub normal_ms: u32,
    pub fast_ms: u32,
}

impl Default for DropTiming {
    fn default() -> Self {
        Self {
            normal_ms: NORMAL_DROP_MS,
            fast_ms: FAST_DROP_MS,
        }
    }
}

/// The falling piece: an orientation plus its top-left offset on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place `shape` horizontally centered on the top row
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: shape.centered_x(BOARD_WIDTH),
            y: 0,
        }
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_placement(&self.shape, self.x, self.y)
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// The following spawn was blocked
    pub game_over: bool,
}

/// Result of a single [`GameState::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Not running, or the drop interval has not elapsed yet
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece could not fall and was merged into the board
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformShapes> {
    board: Board,
    active: ActivePiece,
    next: Shape,
    source: S,
    timing: DropTiming,
    soft_drop: bool,
    drop_counter_ms: u32,
    score: u32,
    lines: u32,
    state: RunState,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<UniformShapes> {
    /// Create a game with uniformly random shapes from `seed`
    pub fn seeded(seed: u32) -> Self {
        Self::new(UniformShapes::new(seed))
    }
}

impl<S: ShapeSource> GameState<S> {
    /// Create a running game with the default drop timing
    pub fn new(source: S) -> Self {
        Self::with_timing(source, DropTiming::default())
    }

    pub fn with_timing(mut source: S, timing: DropTiming) -> Self {
        let current = Shape::from_kind(source.next_shape());
        let next = Shape::from_kind(source.next_shape());

        Self {
            board: Board::new(),
            active: ActivePiece::spawn(current),
            next,
            source,
            timing,
            soft_drop: false,
            drop_counter_ms: 0,
            score: 0,
            lines: 0,
            state: RunState::Running,
            last_event: None,
        }
    }

    /// Replace the board, keeping the active piece.
    ///
    /// Goes straight to game over if the active piece no longer fits.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        if !self.active.is_valid(&self.board) {
            self.state = RunState::GameOver;
        }
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next(&self) -> Shape {
        self.next
    }

    pub fn timing(&self) -> DropTiming {
        self.timing
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Time accumulated toward the next gravity step
    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        if self.soft_drop {
            self.timing.fast_ms
        } else {
            self.timing.normal_ms
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        let in_play = self.state != RunState::GameOver;
        out.active = in_play.then(|| ActiveSnapshot::from(self.active));
        out.ghost_y = if in_play { self.ghost_y() } else { None };
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.state = self.state;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.soft_drop = self.soft_drop;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the game clock by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece falls one
    /// row, or locks if it cannot. Does nothing unless the game is running.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Idle;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms <= self.drop_interval_ms() {
            return TickOutcome::Idle;
        }

        self.drop_counter_ms = 0;
        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        TickOutcome::Locked(self.lock_active())
    }

    /// Apply a player command. Returns whether any state changed.
    ///
    /// Only pause toggle and reset are honored while paused or after game over.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            Command::PauseToggle => self.toggle_pause(),
            _ if self.state != RunState::Running => false,
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDropOn => self.set_soft_drop(true),
            Command::SoftDropOff => self.set_soft_drop(false),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Start over: empty board, zero score, fresh pieces, normal gravity.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.soft_drop = false;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.state = RunState::Running;

        let current = Shape::from_kind(self.source.next_shape());
        self.next = Shape::from_kind(self.source.next_shape());
        self.active = ActivePiece::spawn(current);
        info!(current = ?current.kind(), next = ?self.next.kind(), "game reset");
    }

    /// Landing row of the active piece if it fell straight down
    pub fn ghost_y(&self) -> Option<i8> {
        if !self.active.is_valid(&self.board) {
            return None;
        }
        let mut y = self.active.y;
        while self
            .board
            .is_valid_placement(&self.active.shape, self.active.x, y + 1)
        {
            y += 1;
        }
        Some(y)
    }

    fn toggle_pause(&mut self) -> bool {
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                info!("paused");
                true
            }
            RunState::Paused => {
                self.state = RunState::Running;
                // Time spent paused must not count toward gravity.
                self.drop_counter_ms = 0;
                info!("resumed");
                true
            }
            RunState::GameOver => false,
        }
    }

    fn set_soft_drop(&mut self, on: bool) -> bool {
        if self.soft_drop == on {
            return false;
        }
        self.soft_drop = on;
        true
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = ActivePiece {
            x: self.active.x + dx,
            y: self.active.y + dy,
            ..self.active
        };
        if !moved.is_valid(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate clockwise in place; no kicks are attempted
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = ActivePiece {
            shape: self.active.shape.rotated_cw(),
            ..self.active
        };
        if !rotated.is_valid(&self.board) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece
    pub(crate) fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        self.board.merge(&piece.shape, piece.x, piece.y);
        debug!(kind = ?piece.shape.kind(), x = piece.x, y = piece.y, "piece locked");

        let cleared = self.board.clear_completed_lines();
        let points = line_clear_points(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        if cleared > 0 {
            info!(lines = cleared, points, score = self.score, "lines cleared");
        }

        let spawned = self.spawn_next();
        let event = LockEvent {
            lines_cleared: cleared as u32,
            points,
            game_over: !spawned,
        };
        self.last_event = Some(event);
        event
    }

    /// Promote the next shape to active and draw a new next shape.
    ///
    /// Returns false, and ends the game, when the spawn position is blocked.
    pub(crate) fn spawn_next(&mut self) -> bool {
        let shape = self.next;
        self.next = Shape::from_kind(self.source.next_shape());
        self.active = ActivePiece::spawn(shape);

        if !self.active.is_valid(&self.board) {
            self.state = RunState::GameOver;
            info!(score = self.score, lines = self.lines, "game over");
            return false;
        }

        debug!(kind = ?shape.kind(), next = ?self.next.kind(), "piece spawned");
        true
    }
}

impl Default for GameState<UniformShapes> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
