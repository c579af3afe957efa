//! Board representation for checkers

pub mod board;


// Re-exports
pub use board::{Board, InvalidSize};

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: usize = 7;
/// Largest supported board side length
pub const MAX_BOARD_SIZE: usize = 12;

/// Piece colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction this color's men advance in: White moves toward row 0,
    /// Black toward row `size - 1`.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which this color's men are crowned.
    #[inline]
    pub fn promotion_row(self, size: usize) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => (size - 1) as u8,
        }
    }
}

/// Piece ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board: color plus rank. Immutable value type; a square
/// holds at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub fn man(color: Color) -> Self {
        Self { color, rank: Rank::Man }
    }

    #[inline]
    pub fn king(color: Color) -> Self {
        Self { color, rank: Rank::King }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Crowned version of this piece. Kings stay kings; a Man never demotes.
    #[inline]
    pub fn promoted(self) -> Self {
        Self { color: self.color, rank: Rank::King }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Checkers is played on the dark squares only.
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row as usize + self.col as usize) % 2 == 1
    }

    /// Offset by a diagonal direction, if still on the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    /// Algebraic-style coordinates: column letter plus row number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
