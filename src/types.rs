//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity period in milliseconds (constant, no speed progression)
pub const TICK_MS: u64 = 500;

/// Column where fresh pieces spawn
pub const SPAWN_X: i8 = 3;

/// Flat points awarded per cleared line
pub const POINTS_PER_LINE: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Kind at a catalog index, wrapping to stay total.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Discrete intents the session accepts while running.
///
/// Both the gravity timer and the input mapper speak this vocabulary;
/// an intent that would collide is a silent no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
}

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not running, no game over. Initial state; also reached by stop.
    Idle,
    /// An active piece exists and gravity ticks apply.
    Running,
    /// Terminal until start is invoked again.
    GameOver,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// 24-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
