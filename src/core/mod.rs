//! Core game engine - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has zero
//! dependencies on UI or I/O:
//!
//! - [`shapes`]: the 7 tetromino kinds as static occupancy matrices + colors
//! - [`piece`]: a spawned shape instance and pure clockwise rotation
//! - [`board`]: 10x20 grid with collision testing, merge, and line clearing
//! - [`session`]: the Idle/Running/GameOver state machine owning board,
//!   active piece, and score
//! - [`rng`]: seeded LCG so whole games replay deterministically

pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

// Re-export commonly used types
pub use board::Board;
pub use piece::{rotate_cw, Piece};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use shapes::{catalog_rows, color_for, spawn_matrix, ShapeMatrix};
