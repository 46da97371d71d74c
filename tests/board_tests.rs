//! Board tests - placement, merging and line clearing

use blockfall::core::{Board, Shape};
use blockfall::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, true);
    }
}

fn all_orientations() -> Vec<Shape> {
    let mut out = Vec::new();
    for kind in ShapeKind::ALL {
        let mut s = Shape::from_kind(kind);
        for _ in 0..4 {
            out.push(s);
            s = s.rotated_cw();
        }
    }
    out
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(false), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, true));
    assert!(!board.set(0, -1, true));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_every_in_bounds_placement_valid_on_empty_board() {
    let board = Board::new();
    for shape in all_orientations() {
        let max_x = BOARD_WIDTH as i8 - shape.width() as i8;
        let max_y = BOARD_HEIGHT as i8 - shape.height() as i8;
        for y in 0..=max_y {
            for x in 0..=max_x {
                assert!(board.is_valid_placement(&shape, x, y), "{shape:?} at ({x}, {y})");
            }
        }
        assert!(!board.is_valid_placement(&shape, max_x + 1, 0));
        assert!(!board.is_valid_placement(&shape, 0, max_y + 1));
        assert!(!board.is_valid_placement(&shape, -1, 0));
    }
}

#[test]
fn test_overlap_with_filled_cell_is_invalid() {
    let mut board = Board::new();
    board.set(5, 10, true);

    for shape in all_orientations() {
        for (dx, dy) in shape.filled_cells() {
            assert!(!board.is_valid_placement(&shape, 5 - dx, 10 - dy));
        }
    }
}

#[test]
fn test_merge_then_overlap() {
    let mut board = Board::new();
    let t = Shape::from_kind(ShapeKind::T);
    board.merge(&t, 3, 18);

    assert_eq!(board.filled_count(), 4);
    assert!(!board.is_valid_placement(&t, 3, 18));
    assert!(board.is_valid_placement(&t, 3, 16));
}

#[test]
fn test_clear_two_rows_shifts_in_order() {
    let mut board = Board::new();
    fill_row(&mut board, 10);
    fill_row(&mut board, 15);
    board.set(1, 5, true);
    board.set(2, 12, true);
    board.set(3, 17, true);

    assert_eq!(board.clear_completed_lines(), 2);

    assert!(board.is_row_empty(0));
    assert!(board.is_row_empty(1));
    assert!(board.is_filled_at(1, 7));
    assert!(board.is_filled_at(2, 13));
    assert!(board.is_filled_at(3, 17));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_clear_adjacent_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    board.set(0, 15, true);

    assert_eq!(board.clear_completed_lines(), 4);
    assert!(board.is_filled_at(0, 19));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_nothing() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, true);
    }
    let before = board.clone();
    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_full_top_row_kept_until_shifted() {
    let mut board = Board::new();
    fill_row(&mut board, 0);
    assert_eq!(board.clear_completed_lines(), 0);
    assert!(board.is_row_full(0));

    // Once a lower clear shifts it to row 1 it is cleared in the same pass.
    fill_row(&mut board, 19);
    assert_eq!(board.clear_completed_lines(), 2);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_grid_cells_are_binary() {
    let mut board = Board::new();
    board.merge(&Shape::from_kind(ShapeKind::Z), 0, 0);
    fill_row(&mut board, 19);
    board.clear_completed_lines();

    let mut grid = [[9u8; 10]; 20];
    board.write_u8_grid(&mut grid);
    assert!(grid.iter().flatten().all(|&c| c == 0 || c == 1));
}

#[test]
fn test_placement_near_coordinate_limits_is_invalid() {
    let mut board = Board::new();
    for shape in all_orientations() {
        let corners = [(126, 0), (i8::MAX, 0), (0, i8::MAX), (i8::MAX, i8::MAX), (i8::MIN, 0)];
        for (x, y) in corners {
            assert!(!board.is_valid_placement(&shape, x, y), "{shape:?} at ({x}, {y})");
        }
    }

    // Merging far off the board changes nothing.
    board.merge(&Shape::from_kind(ShapeKind::L), 126, 126);
    board.merge(&Shape::from_kind(ShapeKind::I), i8::MAX, 0);
    assert_eq!(board.filled_count(), 0);
}
