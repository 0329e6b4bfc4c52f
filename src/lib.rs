//! Blockfall: a falling-block puzzle game for the terminal.
//!
//! The crate is split along the only seam that matters: [`core`] is the pure
//! game-state engine (shapes, piece, board, session), while [`input`],
//! [`term`] and [`store`] are collaborators that read state and submit
//! discrete intents. The binary serializes the gravity timer and key events
//! onto one event loop.

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
