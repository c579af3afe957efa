//! Game state management for the checkers GUI
//!
//! Drives the turn loop the way the core contracts prescribe: check the
//! outcome, let the active player (click-driven human or engine thread)
//! produce a move, validate and apply it, switch sides. The exit signal is
//! polled by the app every frame before any moves are generated.

use crate::board::{Board, Color, Pos};
use crate::game::{ExitSignal, GameMode, Player};
use crate::rules::{self, legal_moves, Move, Outcome};
use crate::{AIEngine, MoveResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Color,
    pub outcome: Outcome,
    pub selected: Option<Pos>,
    pub last_move: Option<Move>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    pub exit: ExitSignal,

    /// Legal moves for the side to move, refreshed after every move
    legal: Vec<Move>,

    /// Stop handle of the in-flight search, if any
    ai_stop: Option<Arc<AtomicBool>>,

    // AI engine configuration
    ai_depth: u8,
    ai_time_limit_ms: u64,
}

impl GameState {
    /// Start a game. `size` comes from the new-game card's slider, which
    /// only offers the supported range; an out-of-range value falls back to
    /// the standard board.
    pub fn new(mode: GameMode, size: usize) -> Self {
        let board = Board::new(size).unwrap_or_default();
        let legal = legal_moves(&board, Color::White);
        Self {
            board,
            mode,
            current_turn: Color::White,
            outcome: Outcome::Ongoing,
            selected: None,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            exit: ExitSignal::new(),
            legal,
            ai_stop: None,
            ai_depth: 8,
            ai_time_limit_ms: 500,
        }
    }

    pub fn reset(&mut self, mode: GameMode, size: usize) {
        let exit = self.exit.clone();
        *self = Self::new(mode, size);
        self.exit = exit;
    }

    /// Check if the game has ended (outcome or exit request)
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal() || self.exit.is_requested()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.mode.player_for(self.current_turn) == Player::Human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.mode.player_for(self.current_turn) == Player::Ai
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal destination squares for the currently selected piece
    pub fn selected_targets(&self) -> Vec<Pos> {
        match self.selected {
            Some(from) => self
                .legal
                .iter()
                .filter(|m| m.from == from)
                .map(Move::landing)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Handle a click on a board square: select a piece with moves, or try
    /// to move the selected piece to the clicked destination.
    pub fn handle_click(&mut self, pos: Pos) {
        if self.is_over() {
            return;
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            self.message = Some("Not your turn".to_string());
            return;
        }

        // Clicking one of our movable pieces (re)selects it.
        let own_piece = self
            .board
            .piece_at(pos)
            .is_some_and(|p| p.color == self.current_turn);
        if own_piece {
            if self.legal.iter().any(|m| m.from == pos) {
                self.selected = Some(pos);
                self.message = None;
            } else {
                // Piece exists but may not move, e.g. a capture is forced
                // elsewhere on the board.
                self.message = Some("That piece has no legal move".to_string());
            }
            return;
        }

        let Some(from) = self.selected else {
            self.message = Some("Select one of your pieces first".to_string());
            return;
        };

        // First matching sequence wins when several share a landing square,
        // mirroring the engine's deterministic tie-break.
        let chosen = self
            .legal
            .iter()
            .find(|m| m.from == from && m.landing() == pos)
            .cloned();

        match chosen {
            Some(mv) => self.execute_move(&mv),
            None => self.message = Some("Not a legal destination".to_string()),
        }
    }

    /// Validate and apply a move, then advance the turn.
    fn execute_move(&mut self, mv: &Move) {
        // The legal-move cache already vetted this, but the core validates
        // again and leaves the board untouched on rejection.
        if let Err(err) = rules::try_apply(&mut self.board, self.current_turn, mv) {
            self.message = Some(err.to_string());
            return;
        }

        self.last_move = Some(mv.clone());
        self.move_count += 1;
        self.selected = None;
        self.message = None;
        self.move_timer.stop();

        self.outcome = rules::outcome(&self.board);
        if self.outcome.is_terminal() {
            self.legal.clear();
            return;
        }

        self.current_turn = self.current_turn.opponent();
        self.legal = legal_moves(&self.board, self.current_turn);
        self.move_timer.start();
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board.clone();
        let color = self.current_turn;
        let depth = self.ai_depth;
        let time_limit = self.ai_time_limit_ms;

        let (tx, rx) = channel();

        let mut engine = AIEngine::with_config(depth, time_limit);
        self.ai_stop = Some(engine.stop_handle());

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Cut a running search short; the worker sends its best completed
    /// result through the channel as usual. Used on exit requests.
    pub fn abort_search(&self) {
        if let Some(stop) = &self.ai_stop {
            stop.store(true, Ordering::Relaxed);
        }
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.ai_stop = None;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_stop = None;
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move.clone() {
                Some(mv) => {
                    self.last_ai_result = Some(move_result);
                    self.execute_move(&mv);
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Material still on the board: (men, kings) for a color
    pub fn material(&self, color: Color) -> (usize, usize) {
        let mut men = 0;
        let mut kings = 0;
        for (_, piece) in self.board.pieces_of(color) {
            if piece.is_king() {
                kings += 1;
            } else {
                men += 1;
            }
        }
        (men, kings)
    }
}
