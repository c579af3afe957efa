//! Move application
//!
//! Transforms a board by a chosen move: removes every captured piece along
//! the path, relocates the mover to its final landing square, and crowns it
//! the moment any landing row qualifies. Application is pure board mutation;
//! no scoring, no I/O.

use thiserror::Error;

use crate::board::{Board, Color};

use super::movegen::{legal_moves, Move};

/// A human-submitted move that is not in the legal move set. The board is
/// left untouched; the caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("move is not in the legal move set")]
pub struct MoveError;

/// Perform `mv` on the board.
///
/// The move must come from `legal_moves` for the board's current position;
/// human input goes through `try_apply` instead. Promotion is applied at the
/// first qualifying landing, so a sequence that crowns mid-path finishes as
/// a King even when the final square is not on the back row.
pub fn apply_move(board: &mut Board, mv: &Move) {
    let Some(mut piece) = board.piece_at(mv.from) else {
        debug_assert!(false, "apply_move from an empty square");
        return;
    };

    board.remove_piece(mv.from);
    for &victim in &mv.captures {
        board.remove_piece(victim);
    }

    let promotion_row = piece.color.promotion_row(board.size());
    for &landing in &mv.path {
        if landing.row == promotion_row {
            piece = piece.promoted();
        }
    }

    board.place_piece(mv.landing(), piece);
}

/// Validated entry point for human moves: applies `mv` only if it is a
/// member of `color`'s legal move set.
pub fn try_apply(board: &mut Board, color: Color, mv: &Move) -> Result<(), MoveError> {
    if !legal_moves(board, color).contains(mv) {
        return Err(MoveError);
    }
    apply_move(board, mv);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Piece, Pos, Rank};

    fn empty8() -> Board {
        Board::empty(8).unwrap()
    }

    #[test]
    fn test_step_relocates_piece() {
        let mut board = empty8();
        board.place_piece(Pos::new(5, 2), Piece::man(Color::White));

        apply_move(&mut board, &Move::step(Pos::new(5, 2), Pos::new(4, 1)));
        assert!(board.is_empty(Pos::new(5, 2)));
        assert_eq!(board.piece_at(Pos::new(4, 1)), Some(Piece::man(Color::White)));
    }

    #[test]
    fn test_jump_removes_victim() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 5), Piece::man(Color::White));
        board.place_piece(Pos::new(3, 4), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        apply_move(&mut board, &moves[0]);

        assert!(board.is_empty(Pos::new(3, 4)));
        assert!(board.is_empty(Pos::new(4, 5)));
        assert_eq!(board.piece_at(Pos::new(2, 3)), Some(Piece::man(Color::White)));
        assert_eq!(board.count(Color::Black), 0);
    }

    #[test]
    fn test_double_jump_removes_both_victims() {
        let mut board = empty8();
        board.place_piece(Pos::new(6, 1), Piece::man(Color::White));
        board.place_piece(Pos::new(5, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(3, 2), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        apply_move(&mut board, &moves[0]);

        assert_eq!(board.count(Color::Black), 0);
        assert_eq!(board.count(Color::White), 1);
        // Mover is at the final landing square only, not at the intermediate.
        assert!(board.is_empty(Pos::new(4, 3)));
        assert_eq!(board.piece_at(Pos::new(2, 1)), Some(Piece::man(Color::White)));
    }

    #[test]
    fn test_promotion_on_landing() {
        let mut board = empty8();
        board.place_piece(Pos::new(1, 2), Piece::man(Color::White));

        apply_move(&mut board, &Move::step(Pos::new(1, 2), Pos::new(0, 1)));
        assert_eq!(board.piece_at(Pos::new(0, 1)), Some(Piece::king(Color::White)));
    }

    #[test]
    fn test_black_promotion_row() {
        let mut board = empty8();
        board.place_piece(Pos::new(6, 3), Piece::man(Color::Black));

        apply_move(&mut board, &Move::step(Pos::new(6, 3), Pos::new(7, 2)));
        assert_eq!(board.piece_at(Pos::new(7, 2)), Some(Piece::king(Color::Black)));
    }

    #[test]
    fn test_mid_sequence_promotion_sticks() {
        // Crowned on the intermediate landing, finishes off the back row:
        // the piece must still be a King afterward.
        let mut board = empty8();
        board.place_piece(Pos::new(2, 1), Piece::man(Color::White));
        board.place_piece(Pos::new(1, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(1, 4), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        apply_move(&mut board, &moves[0]);

        let piece = board.piece_at(Pos::new(2, 5)).expect("mover at final square");
        assert_eq!(piece.rank, Rank::King);
        assert_eq!(board.count(Color::Black), 0);
    }

    #[test]
    fn test_king_does_not_repromote() {
        let mut board = empty8();
        board.place_piece(Pos::new(1, 2), Piece::king(Color::White));

        apply_move(&mut board, &Move::step(Pos::new(1, 2), Pos::new(0, 1)));
        assert_eq!(board.piece_at(Pos::new(0, 1)), Some(Piece::king(Color::White)));
    }

    #[test]
    fn test_try_apply_rejects_illegal_move() {
        let mut board = Board::new(8).unwrap();
        let before = board.clone();

        // Sideways "move" that no rule allows.
        let bogus = Move::step(Pos::new(5, 2), Pos::new(5, 4));
        assert_eq!(try_apply(&mut board, Color::White, &bogus), Err(MoveError));
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_apply_rejects_step_when_jump_forced() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 5), Piece::man(Color::White));
        board.place_piece(Pos::new(3, 4), Piece::man(Color::Black));
        board.place_piece(Pos::new(6, 1), Piece::man(Color::White));
        let before = board.clone();

        // The step itself would be fine, but a jump exists elsewhere.
        let step = Move::step(Pos::new(6, 1), Pos::new(5, 0));
        assert_eq!(try_apply(&mut board, Color::White, &step), Err(MoveError));
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_apply_accepts_legal_move() {
        let mut board = Board::new(8).unwrap();
        let moves = legal_moves(&board, Color::White);
        assert!(try_apply(&mut board, Color::White, &moves[0]).is_ok());
    }

    #[test]
    fn test_piece_count_never_increases() {
        let mut board = empty8();
        board.place_piece(Pos::new(6, 1), Piece::man(Color::White));
        board.place_piece(Pos::new(5, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(3, 2), Piece::man(Color::Black));

        let total_before = board.count(Color::White) + board.count(Color::Black);
        let moves = legal_moves(&board, Color::White);
        apply_move(&mut board, &moves[0]);
        let total_after = board.count(Color::White) + board.count(Color::Black);
        assert!(total_after < total_before);
    }
}
