//! Heuristic evaluation function for checkers positions
//!
//! This module provides the static evaluation for the minimax search.
//! It scores positions based on:
//! - Material (Men as the base unit, Kings worth more)
//! - Advancement of Men toward the promotion row
//! - Central-column control
//!
//! The evaluation is zero-sum-symmetric by construction:
//! `evaluate(board, White) == -evaluate(board, Black)`. Negamax correctness
//! depends on this, so every term is computed per side and differenced.

use crate::board::{Board, Color, Piece, Pos, Rank};

/// Base value of a Man
pub const MAN_VALUE: i32 = 100;

/// Value of a King: two and a half Men, so the search favors crowning but
/// will not give up two Men to force one through.
pub const KING_VALUE: i32 = 250;

/// Decisive score for a won game. Larger in magnitude than any heuristic
/// score the material terms can produce; the search uses it (minus the ply
/// distance) for terminal nodes so that forced wins dominate
/// merely-good-looking positions.
pub const WIN_SCORE: i32 = 1_000_000;

/// Bonus per row a Man has advanced from its starting side
const ADVANCE_WEIGHT: i32 = 4;

/// Bonus per step of column-centrality
const CENTER_WEIGHT: i32 = 2;

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`, negative values favor the opponent.
/// Deterministic: the same board always produces the same score.
#[must_use]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    side_score(board, color) - side_score(board, color.opponent())
}

/// Sum of material and positional terms for one side.
fn side_score(board: &Board, color: Color) -> i32 {
    let size = board.size();
    let mut score = 0;

    for (pos, piece) in board.pieces_of(color) {
        score += match piece.rank {
            Rank::Man => MAN_VALUE + ADVANCE_WEIGHT * advancement(pos, piece, size),
            Rank::King => KING_VALUE,
        };
        score += CENTER_WEIGHT * centrality(pos, size);
    }

    score
}

/// Rows a Man has advanced toward its promotion row.
#[inline]
fn advancement(pos: Pos, piece: Piece, size: usize) -> i32 {
    match piece.color {
        Color::White => (size as i32 - 1) - i32::from(pos.row),
        Color::Black => i32::from(pos.row),
    }
}

/// Column-centrality: 0 at the edges, rising toward the middle files.
#[inline]
fn centrality(pos: Pos, size: usize) -> i32 {
    let col = i32::from(pos.col);
    let edge = size as i32 - 1;
    col.min(edge - col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty8() -> Board {
        Board::empty(8).unwrap()
    }

    #[test]
    fn test_fresh_board_is_balanced() {
        let board = Board::new(8).unwrap();
        assert_eq!(evaluate(&board, Color::White), 0);
        assert_eq!(evaluate(&board, Color::Black), 0);
    }

    #[test]
    fn test_antisymmetry() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 3), Piece::man(Color::White));
        board.place_piece(Pos::new(2, 5), Piece::king(Color::White));
        board.place_piece(Pos::new(1, 2), Piece::man(Color::Black));

        assert_eq!(
            evaluate(&board, Color::White),
            -evaluate(&board, Color::Black)
        );
    }

    #[test]
    fn test_antisymmetry_on_varied_sizes() {
        for size in [7usize, 10, 12] {
            let mut board = Board::new(size).unwrap();
            // Skew the position a little to avoid trivially-zero scores.
            board.remove_piece(Pos::new(0, 1));
            assert_eq!(
                evaluate(&board, Color::White),
                -evaluate(&board, Color::Black)
            );
        }
    }

    #[test]
    fn test_material_advantage_scores_positive() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 3), Piece::man(Color::White));
        board.place_piece(Pos::new(4, 5), Piece::man(Color::White));
        board.place_piece(Pos::new(3, 4), Piece::man(Color::Black));

        assert!(evaluate(&board, Color::White) > 0);
        assert!(evaluate(&board, Color::Black) < 0);
    }

    #[test]
    fn test_king_outweighs_man() {
        let mut board = empty8();
        // Mirrored squares so the positional terms cancel.
        board.place_piece(Pos::new(3, 4), Piece::king(Color::White));
        board.place_piece(Pos::new(4, 3), Piece::man(Color::Black));

        assert!(evaluate(&board, Color::White) > 0);
    }

    #[test]
    fn test_advancement_bonus_for_men() {
        let mut near = empty8();
        near.place_piece(Pos::new(2, 3), Piece::man(Color::White));

        let mut far = empty8();
        far.place_piece(Pos::new(6, 3), Piece::man(Color::White));

        assert!(evaluate(&near, Color::White) > evaluate(&far, Color::White));
    }

    #[test]
    fn test_center_bonus() {
        let mut center = empty8();
        center.place_piece(Pos::new(4, 3), Piece::man(Color::White));

        let mut edge = empty8();
        edge.place_piece(Pos::new(4, 7), Piece::man(Color::White));

        assert!(evaluate(&center, Color::White) > evaluate(&edge, Color::White));
    }

    #[test]
    fn test_heuristic_stays_below_win_score() {
        // Even a board packed with kings must not reach the decisive range.
        let mut board = Board::empty(12).unwrap();
        for row in 0..12u8 {
            for col in 0..12u8 {
                let pos = Pos::new(row, col);
                if pos.is_playable() {
                    board.place_piece(pos, Piece::king(Color::White));
                }
            }
        }
        assert!(evaluate(&board, Color::White) < WIN_SCORE / 2);
    }
}
