//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_for, GameSession};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::{Phase, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Display palette. The session itself is theme-agnostic; piece colors come
/// from the shape catalog either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                backdrop: Rgb::new(2, 6, 23),
                board_bg: Rgb::new(15, 23, 42),
                border: Rgb::new(148, 163, 184),
                text: Rgb::new(229, 231, 235),
                dim: Rgb::new(100, 116, 139),
            },
            Theme::Light => Palette {
                backdrop: Rgb::new(248, 250, 252),
                board_bg: Rgb::new(226, 232, 240),
                border: Rgb::new(71, 85, 105),
                text: Rgb::new(2, 6, 23),
                dim: Rgb::new(100, 116, 139),
            },
        }
    }
}

struct Palette {
    backdrop: Rgb,
    board_bg: Rgb,
    border: Rgb,
    text: Rgb,
    dim: Rgb,
}

/// A lightweight terminal view for the game.
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
        Self { cell_w, cell_h }
    }

    /// Render the session plus the persisted best score into a framebuffer.
    pub fn render(
        &self,
        session: &GameSession,
        best_score: u32,
        theme: Theme,
        viewport: Viewport,
    ) -> FrameBuffer {
        let pal = theme.palette();
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(pal.text, pal.backdrop).into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Board frame centered, shifted left to leave room for the panel.
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let board_style = CellStyle::new(pal.dim, pal.board_bg);
        let border_style = CellStyle::new(pal.border, pal.backdrop);

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', board_style);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border_style);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(Some(kind)) = session.board().get(x, y) {
                    self.fill_board_cell(&mut fb, start_x, start_y, x, y, color_for(kind));
                }
            }
        }

        // Active piece.
        if let Some(piece) = session.active() {
            for (dx, dy) in piece.occupied() {
                let x = piece.x + dx;
                let y = piece.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_board_cell(&mut fb, start_x, start_y, x, y, piece.color());
                }
            }
        }

        self.draw_panel(&mut fb, session, best_score, &pal, start_x + frame_w + 2, start_y);

        match session.phase() {
            Phase::GameOver => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER", &pal)
            }
            Phase::Idle => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER", &pal)
            }
            Phase::Running => {}
        }

        fb
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        color: Rgb,
    ) {
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(color, color));
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
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

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        best_score: u32,
        pal: &Palette,
        x: u16,
        y: u16,
    ) {
        let text = CellStyle::new(pal.text, pal.backdrop);
        let title = CellStyle::bold(pal.text, pal.backdrop);
        let dim = CellStyle::new(pal.dim, pal.backdrop);

        fb.put_str(x, y, "BLOCKFALL", title);
        fb.put_str(x, y + 2, &format!("score {:>6}", session.score()), text);
        fb.put_str(
            x,
            y + 3,
            &format!("best  {:>6}", best_score.max(session.score())),
            text,
        );

        fb.put_str(x, y + 5, "← → ↓  move", dim);
        fb.put_str(x, y + 6, "↑      rotate", dim);
        fb.put_str(x, y + 7, "space  drop", dim);
        fb.put_str(x, y + 8, "enter  start", dim);
        fb.put_str(x, y + 9, "p      stop", dim);
        fb.put_str(x, y + 10, "t      theme", dim);
        fb.put_str(x, y + 11, "q      quit", dim);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        msg: &str,
        pal: &Palette,
    ) {
        let style = CellStyle::bold(pal.backdrop, pal.border);
        // Center on displayed characters; byte length would drift for the
        // arrow glyphs the panel already uses.
        let mx = x + w.saturating_sub(msg.chars().count() as u16) / 2;
        let my = y + h / 2;
        fb.put_str(mx, my, msg, style);
    }
}

/// Side panel width in terminal columns.
const PANEL_W: u16 = 16;
