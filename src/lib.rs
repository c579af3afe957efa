//! Checkers engine with mandatory-capture rules
//!
//! A checkers (draughts) engine and GUI implementing the classic rules:
//! - Configurable board size (7 to 12 squares per side)
//! - Forced captures: when a jump exists, simple steps are illegal
//! - Maximal multi-jump chains as single moves
//! - King promotion, effective immediately even mid-jump-sequence
//! - Win by leaving the opponent without a legal move; stalemate when
//!   neither side can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, piece, and square representation
//! - [`rules`]: Move generation, move application, outcome detection
//! - [`eval`]: Position evaluation heuristics
//! - [`search`]: Alpha-beta search with iterative deepening
//! - [`engine`]: Main AI engine integrating search and evaluation
//! - [`game`]: Game mode, player variants, and the exit signal
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use checkers::{AIEngine, Board, Color};
//! use checkers::rules::{apply_move, outcome, Outcome};
//!
//! let mut board = Board::new(8).unwrap();
//! let mut engine = AIEngine::with_config(4, 500);
//!
//! // Drive one AI turn.
//! if outcome(&board) == Outcome::Ongoing {
//!     if let Some(mv) = engine.get_move(&board, Color::White) {
//!         apply_move(&mut board, &mv);
//!     }
//! }
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Piece, Pos, Rank, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{ExitSignal, GameMode, Player};
pub use rules::{Move, Outcome};
