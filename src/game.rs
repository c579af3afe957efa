//! Game-level contracts shared by driver loops
//!
//! The driver (GUI or any other shell) runs one turn at a time: check the
//! outcome, ask the active player's controller for a move, apply it, switch
//! sides. This module holds the pieces of that contract that belong to the
//! core: the game mode, the per-side player variant, and the out-of-band
//! exit signal the driver polls before generating moves each turn.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::Color;

/// How each side is controlled; decided once before play, immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    /// Controller for the given side. In `HumanVsAi` the human plays White,
    /// matching the original single-player arrangement.
    #[must_use]
    pub fn player_for(self, color: Color) -> Player {
        match (self, color) {
            (GameMode::HumanVsHuman, _) => Player::Human,
            (GameMode::HumanVsAi, Color::White) => Player::Human,
            (GameMode::HumanVsAi, Color::Black) => Player::Ai,
            (GameMode::AiVsAi, _) => Player::Ai,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }
}

/// Player variants, polymorphic over one capability: producing the next
/// board state. The interactive variant gathers a validated selection from
/// the user; the search variant asks the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Ai,
}

/// Cooperative "end the game now" signal. Cloneable; every clone observes
/// the same flag, so the driver, the UI, and a running search can share it.
/// Replaces process-wide mutable state: the driver polls it each turn before
/// any moves are generated.
#[derive(Debug, Clone, Default)]
pub struct ExitSignal(Arc<AtomicBool>);

impl ExitSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request immediate termination regardless of board state.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_controller_mapping() {
        assert_eq!(GameMode::HumanVsHuman.player_for(Color::White), Player::Human);
        assert_eq!(GameMode::HumanVsHuman.player_for(Color::Black), Player::Human);
        assert_eq!(GameMode::HumanVsAi.player_for(Color::White), Player::Human);
        assert_eq!(GameMode::HumanVsAi.player_for(Color::Black), Player::Ai);
        assert_eq!(GameMode::AiVsAi.player_for(Color::White), Player::Ai);
        assert_eq!(GameMode::AiVsAi.player_for(Color::Black), Player::Ai);
    }

    #[test]
    fn test_exit_signal_shared_across_clones() {
        let signal = ExitSignal::new();
        let clone = signal.clone();
        assert!(!clone.is_requested());

        signal.request();
        assert!(clone.is_requested());
    }
}
