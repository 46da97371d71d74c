//! Read-only view of the engine for the presentation layer.

use crate::shape::Shape;
use crate::types::{RunState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board grid as 0/1 cells, row 0 at the top
pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Active piece: its current orientation and top-left offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece
    pub ghost_y: Option<i8>,
    pub next: Shape,
    pub score: u32,
    pub lines: u32,
    pub state: RunState,
    pub paused: bool,
    pub game_over: bool,
    pub soft_drop: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.next = Shape::from_kind(ShapeKind::I);
        self.score = 0;
        self.lines = 0;
        self.state = RunState::Running;
        self.paused = false;
        self.game_over = false;
        self.soft_drop = false;
    }

    pub fn playable(&self) -> bool {
        self.state == RunState::Running
    }

    /// Whether (x, y) is covered by a filled cell of the active piece
    pub fn active_covers(&self, x: i8, y: i8) -> bool {
        self.active.is_some_and(|a| {
            a.shape
                .filled_cells()
                .iter()
                .any(|&(dx, dy)| {
                    a.x.checked_add(dx) == Some(x) && a.y.checked_add(dy) == Some(y)
                })
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: Shape::from_kind(ShapeKind::I),
            score: 0,
            lines: 0,
            state: RunState::Running,
            paused: false,
            game_over: false,
            soft_drop: false,
        }
    }
}
