//! Alpha-Beta search with iterative deepening
//!
//! Negamax formulation over the legal-move tree: at each node the moves of
//! the side to move are generated, applied to a cloned board, and the
//! child's negated score is propagated. Branches are pruned once their bound
//! cannot improve an ancestor's result.
//!
//! # Features
//!
//! - Iterative deepening under an optional time budget; on exhaustion the
//!   result of the deepest completed iteration is returned
//! - Terminal nodes inside the horizon (no legal moves) score as a decisive
//!   win/loss magnitude, ply-adjusted so faster wins rank higher
//! - Deterministic tie-break: the first best-scoring move in generation
//!   order wins, so identical inputs always yield the identical move
//! - Shared atomic stop flag for cooperative cancellation between node
//!   expansions
//!
//! # Example
//!
//! ```
//! use checkers::board::{Board, Color};
//! use checkers::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new(8).unwrap();
//!
//! let result = searcher.search(&board, Color::White, 4);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::board::{Board, Color};
use crate::eval::{evaluate, WIN_SCORE};
use crate::rules::{apply_move, legal_moves, Move};

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Scores at or beyond this magnitude are decisive; deepening past a found
/// forced win cannot change the verdict.
const DECISIVE: i32 = WIN_SCORE - 1_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Depth completed in iterative deepening
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Alpha-beta searcher. Holds per-search counters and the shared stop flag;
/// the board itself is cloned per node, so a `Searcher` never aliases the
/// caller's board.
pub struct Searcher {
    nodes: u64,
    stopped: Arc<AtomicBool>,
    start_time: Option<Instant>,
    time_limit: Option<Duration>,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: 0,
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: None,
            time_limit: None,
        }
    }

    /// Handle to the stop flag. Setting it aborts the search cooperatively
    /// at the next node expansion; the best completed result is returned.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stopped)
    }

    /// Fixed-depth search with no time budget.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Color, max_depth: u8) -> SearchResult {
        self.run(board, color, max_depth, None)
    }

    /// Iterative-deepening search under a time budget.
    #[must_use]
    pub fn search_timed(
        &mut self,
        board: &Board,
        color: Color,
        max_depth: u8,
        time_limit: Duration,
    ) -> SearchResult {
        self.run(board, color, max_depth, Some(time_limit))
    }

    fn run(
        &mut self,
        board: &Board,
        color: Color,
        max_depth: u8,
        time_limit: Option<Duration>,
    ) -> SearchResult {
        self.nodes = 0;
        self.stopped.store(false, Ordering::Relaxed);
        self.start_time = Some(Instant::now());
        self.time_limit = time_limit;

        let moves = legal_moves(board, color);
        debug_assert!(
            !moves.is_empty(),
            "search on a terminal position; check rules::outcome first"
        );

        let mut best = SearchResult {
            best_move: None,
            score: -INF,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=max_depth.max(1) {
            let result = self.search_root(board, color, &moves, depth);
            if self.is_stopped() {
                // Partial iterations are discarded; the previous depth stands.
                break;
            }

            best = result;
            best.depth = depth;

            if best.score.abs() >= DECISIVE {
                break;
            }
            if let (Some(start), Some(limit)) = (self.start_time, self.time_limit) {
                if start.elapsed() >= limit {
                    break;
                }
            }
        }

        // Budget exhausted before depth 1 completed: fall back to the first
        // legal move so the contract (a move whenever one exists) holds.
        if best.best_move.is_none() {
            best.best_move = moves.first().cloned();
        }

        best.nodes = self.nodes;
        best
    }

    /// Root-level search with a full alpha-beta window.
    fn search_root(
        &mut self,
        board: &Board,
        color: Color,
        moves: &[Move],
        depth: u8,
    ) -> SearchResult {
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mv in moves {
            let mut child = board.clone();
            apply_move(&mut child, mv);

            let score = -self.alpha_beta(&child, color.opponent(), depth - 1, -INF, -alpha, 1);
            if self.is_stopped() {
                break;
            }

            // Strict improvement only: ties resolve to the earliest move.
            if score > best_score {
                best_score = score;
                best_move = Some(mv.clone());
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive alpha-beta search with negamax formulation. Returns the
    /// score from the perspective of `color`, the side to move at this node.
    fn alpha_beta(
        &mut self,
        board: &Board,
        color: Color,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> i32 {
        self.nodes += 1;

        // Time check every 1024 nodes
        if self.nodes & 1023 == 0 && self.check_time() {
            return 0;
        }
        if self.is_stopped() {
            return 0;
        }

        // Terminal before horizon: the side to move has lost. Ply-adjusted
        // so nearer wins outrank distant ones.
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return -(WIN_SCORE - i32::from(ply));
        }

        if depth == 0 {
            return evaluate(board, color);
        }

        let mut best = -INF;
        for mv in &moves {
            let mut child = board.clone();
            apply_move(&mut child, mv);

            let score =
                -self.alpha_beta(&child, color.opponent(), depth - 1, -beta, -alpha, ply + 1);
            if self.is_stopped() {
                return 0;
            }

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break; // Beta cutoff
            }
        }

        best
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check the time budget and latch the stop flag once exceeded.
    #[inline]
    fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let (Some(start), Some(limit)) = (self.start_time, self.time_limit) {
            if start.elapsed() >= limit {
                self.stopped.store(true, Ordering::Relaxed);
                return true;
            }
        }
        false
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
