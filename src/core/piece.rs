//! Piece module - a spawned shape instance with a board-relative position
//!
//! A piece owns a mutable deep copy of its catalog matrix. Rotation here is a
//! pure geometric transform; whether the rotated shape is legal on the board
//! is the session's responsibility.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::core::shapes::{color_for, spawn_matrix, ShapeMatrix};
use crate::types::{PieceKind, Rgb, SPAWN_X};

/// The active falling piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    /// Column offset of the matrix's left edge on the board.
    pub x: i8,
    /// Row offset of the matrix's top edge on the board.
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at the spawn position.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: spawn_matrix(kind),
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Spawn a piece of a uniformly random kind.
    ///
    /// This is deliberately not a 7-bag draw: repeats are possible.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let kind = PieceKind::from_index(rng.next_range(PieceKind::ALL.len() as u32) as usize);
        Self::new(kind)
    }

    /// Iterate the occupied cells of the matrix as (dx, dy) offsets.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    /// Display color (stable per kind).
    pub fn color(&self) -> Rgb {
        color_for(self.kind)
    }
}

/// Rotate an occupancy matrix 90 degrees clockwise.
///
/// Output row i is input column i read bottom-to-top (transpose, then reverse
/// each resulting row). Works for any rectangular matrix, including the
/// non-square I / T / S / Z / J / L bounding boxes.
pub fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |row| row.len());

    let mut rotated = ShapeMatrix::new();
    for x in 0..cols {
        let mut row = ArrayVec::new();
        for y in (0..rows).rev() {
            row.push(matrix[y][x]);
        }
        rotated.push(row);
    }
    rotated
}
