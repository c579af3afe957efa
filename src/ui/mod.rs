//! GUI for the checkers engine

pub mod app;
pub mod board_view;
pub mod game_state;
pub mod theme;

pub use app::CheckersApp;
pub use game_state::GameState;
