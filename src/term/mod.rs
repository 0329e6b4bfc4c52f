//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the pure [`game_view`] paints the
//! session into a character framebuffer, and [`renderer`] flushes it to a raw
//! crossterm terminal. Keeping the view pure means the whole visual layout is
//! unit-testable without a TTY.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Theme, Viewport};
pub use renderer::TerminalRenderer;
