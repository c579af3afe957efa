//! Game rules for checkers
//!
//! This module implements the rule set:
//! - Legal move enumeration (forced captures, multi-jump chains, promotion)
//! - Move application
//! - Game outcome detection (win / loss / stalemate)

pub mod apply;
pub mod movegen;
pub mod outcome;

// Re-exports for convenient access
pub use apply::{apply_move, try_apply, MoveError};
pub use movegen::{legal_moves, side_has_move, Move};
pub use outcome::{outcome, Outcome};
