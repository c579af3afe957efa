//! Search module for the checkers AI
//!
//! Contains the alpha-beta searcher with iterative deepening and
//! cooperative cancellation.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher};
