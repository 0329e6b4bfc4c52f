//! Shape catalog - the 7 tetromino kinds as occupancy matrices
//!
//! Each matrix is a row-major truth table over the piece's bounding box,
//! top-to-bottom / left-to-right, where 1 marks an occupied cell. The
//! canonical entries are immutable statics; spawning deep-copies them so a
//! rotating piece can never corrupt the catalog.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb};

/// Mutable occupancy matrix of a spawned piece. Bounding boxes are at most
/// 4x4, so rows and columns fit inline without heap allocation.
pub type ShapeMatrix = ArrayVec<ArrayVec<u8, 4>, 4>;

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

/// Canonical (immutable) occupancy rows for a piece kind.
pub fn catalog_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => I_ROWS,
        PieceKind::O => O_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::Z => Z_ROWS,
        PieceKind::J => J_ROWS,
        PieceKind::L => L_ROWS,
    }
}

/// Deep copy of the catalog matrix for a kind, ready to rotate in place.
pub fn spawn_matrix(kind: PieceKind) -> ShapeMatrix {
    catalog_rows(kind)
        .iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// Stable per-kind display color, so a kind always renders identically.
pub fn color_for(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(34, 211, 238),  // cyan
        PieceKind::O => Rgb::new(167, 139, 250), // violet
        PieceKind::T => Rgb::new(52, 211, 153),  // green
        PieceKind::S => Rgb::new(244, 114, 182), // pink
        PieceKind::Z => Rgb::new(251, 113, 133), // red
        PieceKind::J => Rgb::new(250, 204, 21),  // yellow
        PieceKind::L => Rgb::new(96, 165, 250),  // blue
    }
}
