//! Terminal front end.
//!
//! A small, game-oriented rendering layer: a pure [`GameView`] turns a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and the
//! [`TerminalRenderer`] flushes that framebuffer to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Precise control over aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
