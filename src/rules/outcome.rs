//! Game outcome detection
//!
//! A side with no legal move has lost; when neither side can move the game
//! is a stalemate. Detection always runs full move generation for both
//! sides: a side can still hold pieces yet be completely blocked, and piece
//! counting alone would miss that loss.

use crate::board::{Board, Color};

use super::movegen::side_has_move;

/// Terminal state of a game, or `Ongoing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::Ongoing => "game in progress",
            Outcome::WhiteWins => "White wins",
            Outcome::BlackWins => "Black wins",
            Outcome::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// Determine the state of the game from both sides' legal move sets.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    let white_can_move = side_has_move(board, Color::White);
    let black_can_move = side_has_move(board, Color::Black);

    match (white_can_move, black_can_move) {
        (true, true) => Outcome::Ongoing,
        (false, false) => Outcome::Stalemate,
        (true, false) => Outcome::WhiteWins,
        (false, true) => Outcome::BlackWins,
    }
}
