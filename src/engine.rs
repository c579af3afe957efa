//! Main AI engine
//!
//! Thin orchestrator over the alpha-beta searcher that picks the move for a
//! computer-controlled side:
//!
//! 1. **Forced reply**: with exactly one legal move (a mandatory capture,
//!    or a lone escape square) it is returned without searching
//! 2. **Alpha-Beta**: otherwise iterative deepening runs under the
//!    configured depth and time budget
//!
//! The caller must check `rules::outcome` first; invoking the engine on a
//! terminal position is a contract violation.
//!
//! # Example
//!
//! ```
//! use checkers::board::{Board, Color};
//! use checkers::engine::AIEngine;
//!
//! let mut engine = AIEngine::with_config(4, 500);
//! let board = Board::new(8).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Color::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::rules::{legal_moves, Move};
use crate::search::{SearchResult, Searcher};

/// Which phase of the engine produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Only one legal move existed; returned without searching
    ForcedReply,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Evaluation score of the position after the move
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Depth completed
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    fn forced_reply(mv: Move, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score,
            search_type: SearchType::ForcedReply,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// AI engine for a computer-controlled side.
pub struct AIEngine {
    searcher: Searcher,
    /// Maximum search depth for alpha-beta
    max_depth: u8,
    /// Time budget per move
    time_limit: Duration,
}

impl AIEngine {
    /// Create an engine with default settings: depth 8, 500ms per move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(8, 500)
    }

    /// Create an engine with a custom depth cap and time budget.
    #[must_use]
    pub fn with_config(max_depth: u8, time_limit_ms: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
            time_limit: Duration::from_millis(time_limit_ms),
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` only when no legal move exists, which correct callers
    /// rule out by checking `rules::outcome` first.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();

        let mut moves = legal_moves(board, color);
        debug_assert!(
            !moves.is_empty(),
            "engine invoked on a terminal position; check rules::outcome first"
        );
        if moves.is_empty() {
            return MoveResult {
                best_move: None,
                score: 0,
                search_type: SearchType::AlphaBeta,
                depth: 0,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        if moves.len() == 1 {
            let score = evaluate(board, color);
            let mv = moves.remove(0);
            return MoveResult::forced_reply(mv, score, start.elapsed().as_millis() as u64);
        }

        let result = self
            .searcher
            .search_timed(board, color, self.max_depth, self.time_limit);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }

    /// Handle to the searcher's stop flag, for cancelling a move in flight.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.searcher.stop_handle()
    }

    /// Set the maximum search depth for alpha-beta.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    /// Set the time budget per move.
    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.time_limit = Duration::from_millis(time_ms);
    }

    /// Get the current maximum search depth.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
