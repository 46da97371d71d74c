//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Block color shared by locked cells and the falling piece.
const BLOCK: Rgb = Rgb::new(175, 190, 255);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board placement inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal view of the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            show_ghost: true,
        }
    }

    pub fn with_ghost(mut self, show: bool) -> Self {
        self.show_ghost = show;
        self
    }

    /// Render a snapshot into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell {
            ch: ' ',
            style: CellStyle::new(SCREEN_BG, SCREEN_BG),
        });

        let frame = self.frame(viewport);
        let well = CellStyle::new(Rgb::new(80, 80, 90), WELL_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', well);
        draw_border(fb, frame, CellStyle::default());

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                if snap.board[y as usize][x as usize] != 0 {
                    self.draw_block(fb, frame, x, y, CellStyle::new(BLOCK, WELL_BG));
                } else {
                    self.fill_board_cell(fb, frame, x, y, '·', well.dim());
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y.filter(|_| self.show_ghost) {
                let style = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
                self.draw_shape(fb, frame, &active.shape, active.x, ghost_y, '░', style);
            }
            let style = CellStyle::new(BLOCK, WELL_BG).bold();
            self.draw_shape(fb, frame, &active.shape, active.x, active.y, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused {
            draw_overlay(fb, frame, "PAUSED", Some("Esc to resume"));
        } else if snap.game_over {
            draw_overlay(fb, frame, "GAME OVER", Some("Enter to restart"));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, style: CellStyle) {
        self.fill_board_cell(fb, frame, x, y, '█', style);
    }

    /// Draw the filled cells of `shape` at a board offset, clipped to the board.
    #[allow(clippy::too_many_arguments)]
    fn draw_shape(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        shape: &Shape,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        for &(dx, dy) in shape.filled_cells().iter() {
            let bx = x + dx;
            let by = y + dy;
            if bx >= 0 && bx < BOARD_WIDTH as i8 && by >= 0 && by < BOARD_HEIGHT as i8 {
                self.fill_board_cell(fb, frame, bx as u16, by as u16, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let preview = CellStyle::new(BLOCK, SCREEN_BG);
        for (row_idx, row) in snap.next.rows().enumerate() {
            for (col_idx, &v) in row.iter().enumerate() {
                if v != 0 {
                    let px = panel_x + (col_idx as u16) * 2;
                    fb.put_str(px, y + row_idx as u16, "██", preview);
                }
            }
        }
        y += snap.next.height() as u16 + 1;

        if snap.soft_drop {
            fb.put_str(panel_x, y, "FAST", value.dim());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
    if f.w < 2 || f.h < 2 {
        return;
    }

    fb.put_char(f.x, f.y, '┌', style);
    fb.put_char(f.x + f.w - 1, f.y, '┐', style);
    fb.put_char(f.x, f.y + f.h - 1, '└', style);
    fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

    for dx in 1..f.w - 1 {
        fb.put_char(f.x + dx, f.y, '─', style);
        fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
    }
    for dy in 1..f.h - 1 {
        fb.put_char(f.x, f.y + dy, '│', style);
        fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, f: Frame, title: &str, hint: Option<&str>) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = f.y.saturating_add(f.h / 2);
    let centered = |s: &str| f.x.saturating_add(f.w.saturating_sub(s.chars().count() as u16) / 2);

    fb.put_str(centered(title), mid_y, title, style);
    if let Some(hint) = hint {
        let hint_style = CellStyle { bold: false, ..style };
        fb.put_str(centered(hint), mid_y.saturating_add(1), hint, hint_style);
    }
}
