//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the game. It has no dependency on terminals,
//! timers or input devices, which makes it:
//!
//! - **Deterministic**: the shape source is injected, so a seed or a fixed
//!   sequence replays a game exactly
//! - **Testable**: the whole game runs headless through `tick` and commands
//! - **Portable**: any front end can drive it and draw from a snapshot
//!
//! # Module Structure
//!
//! - [`shape`]: the seven piece layouts and clockwise rotation
//! - [`board`]: 10x20 occupancy grid with placement checks and line clearing
//! - [`rng`]: the [`ShapeSource`] trait, uniform random and scripted sources
//! - [`scoring`]: points per line clear
//! - [`snapshot`]: read-only view handed to the renderer
//! - [`game_state`]: the engine: gravity, commands, locking, lifecycle
//!
//! # Rules
//!
//! - Pieces are drawn uniformly at random with replacement (no bag)
//! - Rotation is clockwise, in place, with no wall kicks
//! - A piece that cannot fall locks immediately (no lock delay)
//! - Clearing 1/2/3/4 rows scores 100/300/600/1000
//! - Soft drop only shortens the gravity interval (500ms -> 75ms)
//!
//! # Example
//!
//! ```
//! use blockfall_core::rng::ShapeSequence;
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_core::types::{Command, ShapeKind};
//!
//! let mut game = GameState::new(ShapeSequence::repeat(ShapeKind::T));
//!
//! game.handle_command(Command::MoveLeft);
//! game.handle_command(Command::Rotate);
//! assert_eq!(game.tick(501), TickOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(snap.playable());
//! ```
//!
//! # Timing
//!
//! The caller owns the clock. Call [`GameState::tick`] once per frame with the
//! milliseconds elapsed since the previous frame; after a pause, restart the
//! clock rather than passing the whole paused duration.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, DropTiming, GameState, LockEvent, TickOutcome};
pub use rng::{ShapeSequence, ShapeSource, SimpleRng, UniformShapes};
pub use scoring::line_clear_points;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot};
