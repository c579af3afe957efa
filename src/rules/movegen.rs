//! Legal move enumeration
//!
//! Produces the exhaustive legal move set for one side:
//! - Men step diagonally forward, Kings in all four diagonals
//! - Jumps go over an adjacent enemy piece onto the empty square beyond
//! - If any jump exists, simple steps are illegal for the whole side
//! - Jump sequences are maximal: a piece keeps jumping while a continuation
//!   exists, and only that piece's continuations are considered mid-sequence
//!
//! A Man crowned mid-sequence becomes a King immediately and may use King
//! jump directions for the remaining legs of the same sequence.
//!
//! Generation order is deterministic: pieces in ascending square-index order,
//! directions in a fixed order, continuations depth-first. The search engine
//! relies on this for reproducible tie-breaking.

use crate::board::{Board, Color, Piece, Pos, Rank};

/// Fixed direction order for kings (and for enumerating both sides' men).
const KING_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const WHITE_MAN_DIRS: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_DIRS: [(i32, i32); 2] = [(1, -1), (1, 1)];

/// A single top-level move choice: one simple step, or one complete
/// (maximal) jump sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Square the piece starts from
    pub from: Pos,
    /// Successive landing squares; the last entry is where the piece ends up
    pub path: Vec<Pos>,
    /// Squares of the jumped pieces, one per landing; empty for a step
    pub captures: Vec<Pos>,
}

impl Move {
    /// A simple diagonal step.
    pub fn step(from: Pos, to: Pos) -> Self {
        Self {
            from,
            path: vec![to],
            captures: Vec::new(),
        }
    }

    /// Final square the moving piece lands on.
    #[inline]
    pub fn landing(&self) -> Pos {
        self.path.last().copied().unwrap_or(self.from)
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Number of enemy pieces this move removes.
    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}", self.from)?;
        for landing in &self.path {
            write!(f, "{sep}{landing}")?;
        }
        Ok(())
    }
}

/// Directions a piece may move and jump in.
#[inline]
fn dirs(piece: Piece) -> &'static [(i32, i32)] {
    match (piece.rank, piece.color) {
        (Rank::King, _) => &KING_DIRS,
        (Rank::Man, Color::White) => &WHITE_MAN_DIRS,
        (Rank::Man, Color::Black) => &BLACK_MAN_DIRS,
    }
}

/// Enumerate the legal moves for `color`.
///
/// If any piece of `color` has an available jump, the result contains only
/// jump moves (forced capture); otherwise it contains all simple steps.
/// An empty result means the side has lost or the game is a stalemate
/// (decided by `rules::outcome`).
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut jumps = Vec::new();
    for (pos, piece) in board.pieces_of(color) {
        collect_jumps(board, pos, piece, &mut jumps);
    }
    if !jumps.is_empty() {
        return jumps;
    }

    let mut steps = Vec::new();
    for (pos, piece) in board.pieces_of(color) {
        for &(dr, dc) in dirs(piece) {
            if let Some(to) = pos.offset(dr, dc, board.size()) {
                if board.is_empty(to) {
                    steps.push(Move::step(pos, to));
                }
            }
        }
    }
    steps
}

/// Cheap check used by the outcome detector: does `color` have at least one
/// legal move?
#[must_use]
pub fn side_has_move(board: &Board, color: Color) -> bool {
    !legal_moves(board, color).is_empty()
}

/// Collect every maximal jump sequence starting at `from`.
fn collect_jumps(board: &Board, from: Pos, piece: Piece, out: &mut Vec<Move>) {
    // The moving piece leaves its origin square, so a King sequence may
    // legally land back on it.
    let mut scratch = board.clone();
    scratch.remove_piece(from);

    let mut path = Vec::new();
    let mut captured = Vec::new();
    extend_jump(&scratch, from, piece, from, &mut path, &mut captured, out);
}

/// Depth-first continuation search. Pushes a `Move` when no further jump
/// exists for the sequence explored so far.
fn extend_jump(
    scratch: &Board,
    current: Pos,
    piece: Piece,
    from: Pos,
    path: &mut Vec<Pos>,
    captured: &mut Vec<Pos>,
    out: &mut Vec<Move>,
) {
    let size = scratch.size();
    let mut extended = false;

    for &(dr, dc) in dirs(piece) {
        let Some(over) = current.offset(dr, dc, size) else {
            continue;
        };
        let Some(landing) = current.offset(2 * dr, 2 * dc, size) else {
            continue;
        };
        let Some(victim) = scratch.piece_at(over) else {
            continue;
        };
        if victim.color == piece.color || !scratch.is_empty(landing) {
            continue;
        }

        extended = true;

        // A jumped piece is gone for the rest of this sequence and cannot be
        // jumped twice.
        let mut next = scratch.clone();
        next.remove_piece(over);

        // Immediate promotion: continuations after crowning use King dirs.
        let next_piece = if landing.row == piece.color.promotion_row(size) {
            piece.promoted()
        } else {
            piece
        };

        path.push(landing);
        captured.push(over);
        extend_jump(&next, landing, next_piece, from, path, captured, out);
        path.pop();
        captured.pop();
    }

    if !extended && !captured.is_empty() {
        out.push(Move {
            from,
            path: path.clone(),
            captures: captured.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Piece, Pos};

    fn empty8() -> Board {
        Board::empty(8).unwrap()
    }

    #[test]
    fn test_opening_white_has_seven_steps() {
        let board = Board::new(8).unwrap();
        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| !m.is_jump()));
    }

    #[test]
    fn test_opening_black_has_seven_steps() {
        let board = Board::new(8).unwrap();
        let moves = legal_moves(&board, Color::Black);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| !m.is_jump()));
    }

    #[test]
    fn test_man_steps_forward_only() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 3), Piece::man(Color::White));
        let moves = legal_moves(&board, Color::White);
        let targets: Vec<Pos> = moves.iter().map(Move::landing).collect();
        assert_eq!(targets, vec![Pos::new(3, 2), Pos::new(3, 4)]);
    }

    #[test]
    fn test_king_steps_in_four_directions() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 3), Piece::king(Color::White));
        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_blocked_man_has_no_moves() {
        let mut board = empty8();
        // Black man in the corner row, both forward squares blocked by white
        // pieces that cannot be jumped (landing squares occupied/off-board).
        board.place_piece(Pos::new(0, 1), Piece::man(Color::Black));
        board.place_piece(Pos::new(1, 0), Piece::man(Color::White));
        board.place_piece(Pos::new(1, 2), Piece::man(Color::White));
        board.place_piece(Pos::new(2, 3), Piece::man(Color::White));
        assert!(legal_moves(&board, Color::Black).is_empty());
    }

    #[test]
    fn test_forced_capture_excludes_all_steps() {
        let mut board = empty8();
        // This white man has an available jump...
        board.place_piece(Pos::new(4, 5), Piece::man(Color::White));
        board.place_piece(Pos::new(3, 4), Piece::man(Color::Black));
        // ...and this one only has simple steps, which become illegal.
        board.place_piece(Pos::new(6, 1), Piece::man(Color::White));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        let jump = &moves[0];
        assert!(jump.is_jump());
        assert_eq!(jump.from, Pos::new(4, 5));
        assert_eq!(jump.landing(), Pos::new(2, 3));
        assert_eq!(jump.captures, vec![Pos::new(3, 4)]);
    }

    #[test]
    fn test_double_jump_is_one_move() {
        let mut board = empty8();
        board.place_piece(Pos::new(6, 1), Piece::man(Color::White));
        board.place_piece(Pos::new(5, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(3, 2), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        let jump = &moves[0];
        assert_eq!(jump.from, Pos::new(6, 1));
        assert_eq!(jump.path, vec![Pos::new(4, 3), Pos::new(2, 1)]);
        assert_eq!(jump.captures, vec![Pos::new(5, 2), Pos::new(3, 2)]);
    }

    #[test]
    fn test_sequence_cannot_stop_early() {
        // Same rig as the double jump: the single-capture prefix must not
        // appear as a separate move.
        let mut board = empty8();
        board.place_piece(Pos::new(6, 1), Piece::man(Color::White));
        board.place_piece(Pos::new(5, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(3, 2), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert!(moves.iter().all(|m| m.capture_count() == 2));
    }

    #[test]
    fn test_branching_jumps_produce_separate_moves() {
        let mut board = empty8();
        board.place_piece(Pos::new(6, 3), Piece::man(Color::White));
        board.place_piece(Pos::new(5, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(5, 4), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 2);
        let landings: Vec<Pos> = moves.iter().map(Move::landing).collect();
        assert!(landings.contains(&Pos::new(4, 1)));
        assert!(landings.contains(&Pos::new(4, 5)));
    }

    #[test]
    fn test_mid_sequence_promotion_grants_king_continuation() {
        // White man jumps onto the promotion row, is crowned immediately, and
        // the new King continues the same sequence backward.
        let mut board = empty8();
        board.place_piece(Pos::new(2, 1), Piece::man(Color::White));
        board.place_piece(Pos::new(1, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(1, 4), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        let jump = &moves[0];
        assert_eq!(jump.path, vec![Pos::new(0, 3), Pos::new(2, 5)]);
        assert_eq!(jump.captures, vec![Pos::new(1, 2), Pos::new(1, 4)]);
    }

    #[test]
    fn test_man_does_not_jump_backward() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 3), Piece::man(Color::White));
        // Enemy behind the man; a King could jump it, a Man cannot.
        board.place_piece(Pos::new(5, 4), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert!(moves.iter().all(|m| !m.is_jump()));
    }

    #[test]
    fn test_king_jumps_backward() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 3), Piece::king(Color::White));
        board.place_piece(Pos::new(5, 4), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].landing(), Pos::new(6, 5));
    }

    #[test]
    fn test_no_jump_onto_occupied_landing() {
        let mut board = empty8();
        board.place_piece(Pos::new(4, 5), Piece::man(Color::White));
        board.place_piece(Pos::new(3, 4), Piece::man(Color::Black));
        board.place_piece(Pos::new(2, 3), Piece::man(Color::Black));

        let moves = legal_moves(&board, Color::White);
        // Landing square occupied: the jump is gone, the step to (3,6) stays.
        assert!(moves.iter().all(|m| !m.is_jump()));
    }

    #[test]
    fn test_rules_mirror_for_black() {
        let mut board = empty8();
        board.place_piece(Pos::new(1, 2), Piece::man(Color::Black));
        board.place_piece(Pos::new(2, 3), Piece::man(Color::White));

        let moves = legal_moves(&board, Color::Black);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].landing(), Pos::new(3, 4));
        assert_eq!(moves[0].captures, vec![Pos::new(2, 3)]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let board = Board::new(10).unwrap();
        assert_eq!(
            legal_moves(&board, Color::White),
            legal_moves(&board, Color::White)
        );
    }

    #[test]
    fn test_move_display() {
        let step = Move::step(Pos::new(5, 2), Pos::new(4, 1));
        assert_eq!(step.to_string(), "c5-b4");

        let jump = Move {
            from: Pos::new(6, 1),
            path: vec![Pos::new(4, 3), Pos::new(2, 1)],
            captures: vec![Pos::new(5, 2), Pos::new(3, 2)],
        };
        assert_eq!(jump.to_string(), "b6xd4xb2");
    }
}
