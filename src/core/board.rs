//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that locked there. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). New pieces spawn with their matrix's top-left at (3, 0).

use crate::core::piece::Piece;
use crate::core::shapes::ShapeMatrix;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Test whether an occupancy matrix placed at (x, y) collides.
    ///
    /// An occupied matrix cell at board position (bx, by) collides when bx is
    /// outside the columns, by is past the bottom row, or the board cell there
    /// is already filled. Rows above the board (by < 0) never collide, which
    /// is what lets a piece spawn at y=0 with overhanging empty rows.
    pub fn collides(&self, x: i8, y: i8, matrix: &ShapeMatrix) -> bool {
        for (dy, row) in matrix.iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let bx = x + dx as i8;
                let by = y + dy as i8;
                if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                    return true;
                }
                if by < 0 {
                    continue;
                }
                if self.is_occupied(bx, by) {
                    return true;
                }
            }
        }
        false
    }

    /// Write a piece's occupied cells into the board.
    ///
    /// Cells that fall outside the grid are dropped silently; callers are
    /// expected to have collision-tested the position first.
    pub fn merge(&mut self, piece: &Piece) {
        for (dx, dy) in piece.occupied() {
            self.set(piece.x + dx, piece.y + dy, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, injecting empty rows at the top so the row
    /// count never changes. Returns the number of rows removed.
    ///
    /// Two-pointer compaction from the bottom with zero allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut cleared = 0;

        // Scan from bottom to top, keeping non-full rows in order.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh empty rows at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_merge_writes_piece_kind() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::O);
        piece.x = 3;
        piece.y = 18;
        board.merge(&piece);

        assert_eq!(board.get(3, 18), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 18), Some(Some(PieceKind::O)));
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 18), Some(None));
    }
}
