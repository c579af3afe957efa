//! Board structure with standard checkers setup

use thiserror::Error;

use super::{Color, Piece, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Board size outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("board size {0} outside supported range {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}")]
pub struct InvalidSize(pub usize);

/// A square checkers board. Squares are addressed by `Pos` (or flat index);
/// pieces live on dark squares only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Create a board with the standard starting position: the two rows
    /// nearest each player filled with that player's men on dark squares.
    /// Black occupies the top rows, White the bottom rows.
    pub fn new(size: usize) -> Result<Self, InvalidSize> {
        let mut board = Self::empty(size)?;

        for row in 0..2u8 {
            for col in 0..size as u8 {
                let pos = Pos::new(row, col);
                if pos.is_playable() {
                    board.place_piece(pos, Piece::man(Color::Black));
                }
            }
        }
        for row in (size as u8 - 2)..size as u8 {
            for col in 0..size as u8 {
                let pos = Pos::new(row, col);
                if pos.is_playable() {
                    board.place_piece(pos, Piece::man(Color::White));
                }
            }
        }

        Ok(board)
    }

    /// Create a board with no pieces. Position setup helper; game moves go
    /// through `rules::apply_move`.
    pub fn empty(size: usize) -> Result<Self, InvalidSize> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(InvalidSize(size));
        }
        Ok(Self {
            size,
            squares: vec![None; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get piece at position
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.squares[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.piece_at(pos).is_none()
    }

    #[inline]
    pub fn is_on_board(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col, self.size)
    }

    /// Put a piece on a square. Position setup helper; game moves go through
    /// `rules::apply_move`.
    #[inline]
    pub fn place_piece(&mut self, pos: Pos, piece: Piece) {
        let idx = pos.to_index(self.size);
        self.squares[idx] = Some(piece);
    }

    /// Remove a piece from a square.
    #[inline]
    pub fn remove_piece(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.squares[idx] = None;
    }

    /// Iterate over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, sq)| sq.map(|p| (Pos::from_index(idx, self.size), p)))
    }

    /// Iterate over squares occupied by the given color, in ascending
    /// square-index order. Move generation relies on this ordering for
    /// deterministic output.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Count pieces of a color
    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}

impl Default for Board {
    /// Standard 8x8 game.
    fn default() -> Self {
        match Self::new(8) {
            Ok(board) => board,
            Err(_) => unreachable!("8 is within the supported size range"),
        }
    }
}
