//! Position evaluation for the checkers engine

pub mod heuristic;

pub use heuristic::{evaluate, KING_VALUE, MAN_VALUE, WIN_SCORE};
