//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Soft drop is a
//! held command, so key releases matter; [`SoftDropLatch`] turns press/release
//! pairs into `SoftDropOn` / `SoftDropOff` and falls back to a timeout on
//! terminals that never report releases.

pub mod latch;
pub mod map;

pub use blockfall_types as types;

pub use latch::SoftDropLatch;
pub use map::{is_soft_drop_key, map_key_press, should_quit};
