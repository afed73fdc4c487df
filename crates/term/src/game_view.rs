//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Point};

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

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const FOOD: CellStyle = CellStyle::new(Rgb::new(255, 255, 0), Rgb::new(255, 160, 122));
const BODY: CellStyle = CellStyle::new(Rgb::new(144, 238, 144), Rgb::new(240, 240, 240));
const HEAD: CellStyle = CellStyle::new(Rgb::new(40, 170, 70), Rgb::new(240, 240, 240)).bold();
const DEAD: CellStyle = CellStyle::new(Rgb::new(220, 80, 80), Rgb::new(240, 240, 240));

/// Where the board frame ended up inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(PANEL_BG, PANEL_BG).cell(' '));

        let layout = self.layout(snap, viewport);

        self.draw_header(fb, snap, layout);

        let playfield = CellStyle::new(Rgb::new(70, 70, 85), PLAYFIELD_BG);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            (layout.frame_w - 2).min(viewport.width),
            (layout.frame_h - 2).min(viewport.height),
            ' ',
            playfield,
        );
        self.draw_border(fb, layout, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        // Only cells that can land inside the viewport.
        let (cols, rows) = self.visible_cells(snap, layout, viewport);
        for y in 0..rows {
            for x in 0..cols {
                self.fill_cell(fb, layout, snap, Point::new(x, y), '·', playfield);
            }
        }

        if let Some(food) = snap.food {
            self.fill_cell(fb, layout, snap, food, '●', FOOD);
        }

        // Tail first so the head wins when segments share a cell.
        let dead = snap.status == GameStatus::GameOver;
        for (i, &segment) in snap.snake.iter().enumerate().rev() {
            let (ch, style) = match (i, dead) {
                (0, true) => ('X', DEAD.bold()),
                (_, true) => ('▓', DEAD),
                (0, false) => ('█', HEAD),
                (_, false) => ('▓', BODY),
            };
            self.fill_cell(fb, layout, snap, segment, ch, style);
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.status {
            GameStatus::GameOver => {
                self.draw_overlay(fb, layout, &["GAME OVER", "PRESS R TO RESTART"])
            }
            GameStatus::Won => self.draw_overlay(fb, layout, &["YOU WIN!", "PRESS R TO RESTART"]),
            GameStatus::Running if snap.paused => self.draw_overlay(fb, layout, &["PAUSED"]),
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Header row, then the bordered board, centered as a block.
    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let board_w = snap.board_width.clamp(0, i32::from(u16::MAX)) as u16;
        let board_h = snap.board_height.clamp(0, i32::from(u16::MAX)) as u16;
        let frame_w = board_w.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = board_h.saturating_mul(self.cell_h).saturating_add(2);
        let block_h = frame_h.saturating_add(1);

        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: (viewport.height.saturating_sub(block_h) / 2).saturating_add(1),
            frame_w,
            frame_h,
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let label = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let y = layout.y.saturating_sub(1);
        let x = fb.put_str(layout.x, y, "SCORE ", label);
        fb.put_u32(x, y, snap.score, label);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Paint one board cell; points off the board are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        snap: &GameSnapshot,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.y < 0 || p.x >= snap.board_width || p.y >= snap.board_height {
            return;
        }
        let Some((px, py)) = self.cell_origin(layout, p) else {
            return;
        };
        if px >= fb.width() || py >= fb.height() {
            return;
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Top-left terminal position of board cell `p`, if it fits in `u16`.
    fn cell_origin(&self, layout: Layout, p: Point) -> Option<(u16, u16)> {
        let cx = u16::try_from(p.x).ok()?;
        let cy = u16::try_from(p.y).ok()?;
        let px = cx
            .checked_mul(self.cell_w)?
            .checked_add(layout.x)?
            .checked_add(1)?;
        let py = cy
            .checked_mul(self.cell_h)?
            .checked_add(layout.y)?
            .checked_add(1)?;
        Some((px, py))
    }

    /// Board columns and rows whose cells start inside the viewport.
    fn visible_cells(&self, snap: &GameSnapshot, layout: Layout, viewport: Viewport) -> (i32, i32) {
        let free_w = viewport.width.saturating_sub(layout.x.saturating_add(1));
        let free_h = viewport.height.saturating_sub(layout.y.saturating_add(1));
        let cols = i32::from(free_w.div_ceil(self.cell_w));
        let rows = i32::from(free_h.div_ceil(self.cell_h));
        (
            snap.board_width.clamp(0, cols),
            snap.board_height.clamp(0, rows),
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = CellStyle::new(Rgb::new(120, 120, 130), PANEL_BG);

        let mut y = layout.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("SPEED", snap.speed),
            ("LENGTH", snap.snake.len() as u32),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        for line in ["WASD/arrows", "P pause", "R restart", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 60, 60), PANEL_BG).bold();
        let first_y = layout
            .y
            .saturating_add(layout.frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout
                .x
                .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, first_y.saturating_add(i as u16), text, style);
        }
    }
}
