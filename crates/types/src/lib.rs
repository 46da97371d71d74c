//! Shared types module - plain data and constants
//!
//! Everything here is dependency-free so the core engine, the input mapper and
//! the terminal view can agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NORMAL_DROP_MS` | 500 | Gravity interval while no soft drop is held |
//! | `FAST_DROP_MS` | 75 | Gravity interval while soft drop is held |
//! | `FRAME_MS` | 16 | Frame period of the terminal driver (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Command::from_str("softDropOn"), Some(Command::SoftDropOn));
//! assert_eq!(Command::from_str("jump"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval without soft drop (500ms per row)
pub const NORMAL_DROP_MS: u32 = 500;

/// Gravity interval while soft drop is held (75ms per row)
pub const FAST_DROP_MS: u32 = 75;

/// Frame period used by the terminal driver (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Line clear scoring table, indexed by lines cleared in one lock.
///
/// Counts above 4 are clamped to the last entry.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 600, 1000];

/// The seven piece shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    O,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Position of this kind in [`ShapeKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::T => 1,
            ShapeKind::O => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }
}

/// Commands the presentation layer forwards to the engine.
///
/// Soft drop is a held command: `SoftDropOn` on key press, `SoftDropOff` on
/// release. It only changes the gravity rate, it never moves the piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Switch gravity to the fast interval
    SoftDropOn,
    /// Restore the normal gravity interval
    SoftDropOff,
    /// Rotate the active piece 90° clockwise in place
    Rotate,
    /// Toggle between running and paused
    PauseToggle,
    /// Start a fresh game, from any state
    Reset,
}

impl Command {
    /// Parse a command name (case-insensitive).
    ///
    /// Unrecognized names yield `None` and are meant to be ignored by callers.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdropon" => Some(Command::SoftDropOn),
            "softdropoff" => Some(Command::SoftDropOff),
            "rotate" => Some(Command::Rotate),
            "pausetoggle" => Some(Command::PauseToggle),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDropOn => "softDropOn",
            Command::SoftDropOff => "softDropOff",
            Command::Rotate => "rotate",
            Command::PauseToggle => "pauseToggle",
            Command::Reset => "reset",
        }
    }
}

/// Lifecycle of a single game.
///
/// `GameOver` is terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "game_over",
        }
    }
}
