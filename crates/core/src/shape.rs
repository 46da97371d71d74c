//! Shape catalog - the seven piece layouts and the clockwise rotation
//!
//! A shape is a small rectangular 0/1 matrix stored inline in a fixed 4x4
//! buffer, so shapes are `Copy` and rotating never allocates.
//! Coordinates inside a shape are (x, y) with (0, 0) at the top-left cell.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Filled cells of a shape as (x, y) offsets from its top-left corner
pub type FilledCells = ArrayVec<(i8, i8), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// One orientation of one piece.
///
/// Only the top-left `height x width` corner of `cells` is meaningful; the
/// remainder is always zero so derived equality compares occupancy and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    width: u8,
    height: u8,
    cells: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Canonical spawn orientation for a catalog kind
    pub fn from_kind(kind: ShapeKind) -> Self {
        let rows: &[&[u8]] = match kind {
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            ShapeKind::L => &[&[0, 0, 1], &[1, 1, 1]],
        };
        // Catalog rows are well-formed, so this cannot fail.
        Self::from_rows(kind, rows).unwrap_or_else(|| unreachable!("catalog shape {kind:?}"))
    }

    /// Build a shape from explicit rows.
    ///
    /// Returns `None` if the matrix is empty, ragged, larger than 4x4, or holds
    /// a value other than 0 or 1.
    pub fn from_rows(kind: ShapeKind, rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 || height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return None;
        }

        let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                if v > 1 {
                    return None;
                }
                cells[y][x] = v;
            }
        }

        Some(Self {
            kind,
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell value at (x, y); 0 outside the matrix
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width as usize || y >= self.height as usize {
            return 0;
        }
        self.cells[y][x]
    }

    /// Matrix rows, trimmed to the shape's width
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.height as usize]
            .iter()
            .map(move |row| &row[..self.width as usize])
    }

    /// Offsets of every filled cell, row-major
    pub fn filled_cells(&self) -> FilledCells {
        let mut out = FilledCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// An R x C matrix becomes C x R with `new[x][R - 1 - y] = old[y][x]`.
    /// The receiver is left untouched.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.height as usize;
        let cols = self.width as usize;
        let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for y in 0..rows {
            for x in 0..cols {
                cells[x][rows - 1 - y] = self.cells[y][x];
            }
        }

        Self {
            kind: self.kind,
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Column offset that centers this shape on a board of `board_width` columns
    pub fn centered_x(&self, board_width: u8) -> i8 {
        ((board_width as i16 - self.width as i16) / 2) as i8
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Shape::from_kind(kind)
    }
}
