//! Board module - the fixed 10x20 occupancy grid
//!
//! Each cell is either empty or filled; a merged piece keeps no identity.
//! Storage is a flat row-major array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::shape::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Occupancy at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set occupancy at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// In bounds and filled
    pub fn is_filled_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Board cell under shape offset (`dx`, `dy`) when the shape sits at
    /// (`x`, `y`); `None` if the coordinate does not fit in `i8`.
    #[inline]
    fn offset_cell(x: i8, y: i8, dx: i8, dy: i8) -> Option<(i8, i8)> {
        Some((x.checked_add(dx)?, y.checked_add(dy)?))
    }

    /// Check whether `shape` fits with its top-left cell at (`x`, `y`).
    ///
    /// Only filled shape cells are checked: each must land inside the board on
    /// an empty cell. Empty shape cells may hang over the edges.
    pub fn is_valid_placement(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.filled_cells().iter().all(|&(dx, dy)| {
            Self::offset_cell(x, y, dx, dy).is_some_and(|(cx, cy)| self.is_empty_at(cx, cy))
        })
    }

    /// Fill the board cells under every filled cell of `shape`.
    ///
    /// The caller guarantees the placement is valid; cells falling outside the
    /// board are skipped.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for &(dx, dy) in shape.filled_cells().iter() {
            if let Some((cx, cy)) = Self::offset_cell(x, y, dx, dy) {
                self.set(cx, cy, true);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&c| c)
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&c| !c)
    }

    /// Remove row `y`, shift every row above it down by one and empty row 0.
    pub fn remove_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(false);
    }

    /// Clear every complete row and return how many were removed.
    ///
    /// Rows are scanned from the bottom up. After a removal the same index is
    /// examined again, since the row above has shifted into it. The scan stops
    /// before row 0, so the top row is never cleared.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT - 1;
        while y > 0 {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Write the board into a 0/1 grid, row 0 first
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = u8::from(self.cells[start + x]);
            }
        }
    }

    /// Build a board from a 0/1 grid; any non-zero value counts as filled
    pub fn from_u8_grid(grid: &[[u8; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = v != 0;
            }
        }
        board
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, true);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_placement_ignores_unfilled_overhang() {
        let board = Board::new();
        // T rotated is [[0,1],[1,1],[0,1]]: its middle row reaches x = -1.
        let shape = Shape::from_kind(ShapeKind::T).rotated_cw();
        assert!(!board.is_valid_placement(&shape, -1, 5));

        // A shape whose whole left column is empty may overhang the wall.
        let shape = Shape::from_rows(ShapeKind::T, &[&[0, 1], &[0, 1]]).unwrap();
        assert!(board.is_valid_placement(&shape, -1, 0));
    }

    #[test]
    fn test_merge_sets_only_filled_cells() {
        let mut board = Board::new();
        let shape = Shape::from_kind(ShapeKind::S);
        board.merge(&shape, 2, 10);
        assert_eq!(board.filled_count(), 4);
        assert!(!board.is_filled_at(2, 10));
        assert!(board.is_filled_at(3, 10));
        assert!(board.is_filled_at(4, 10));
        assert!(board.is_filled_at(2, 11));
        assert!(board.is_filled_at(3, 11));
    }

    #[test]
    fn test_clear_rescans_same_index() {
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        board.set(0, 17, true);

        assert_eq!(board.clear_completed_lines(), 2);
        assert!(board.is_filled_at(0, 19));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_top_row_is_never_cleared() {
        let mut board = Board::new();
        fill_row(&mut board, 0);
        assert_eq!(board.clear_completed_lines(), 0);
        assert!(board.is_row_full(0));
    }

    #[test]
    fn test_offset_cell_overflow() {
        assert_eq!(Board::offset_cell(126, 0, 2, 1), None);
        assert_eq!(Board::offset_cell(0, -128, 0, -1), None);
        assert_eq!(Board::offset_cell(3, 4, 1, 1), Some((4, 5)));
    }

    #[test]
    fn test_u8_grid_roundtrip() {
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        grid[5][3] = 1;
        grid[19][9] = 1;
        let board = Board::from_u8_grid(&grid);

        let mut back = [[7u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut back);
        assert_eq!(grid, back);
    }
}
