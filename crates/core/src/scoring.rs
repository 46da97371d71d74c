//! Scoring module - points for line clears
//!
//! A single lock can clear at most four rows, so the lookup table stops at
//! four; larger counts are clamped rather than rejected.

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows in one lock
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
