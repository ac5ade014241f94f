mod board;
mod game_state;
mod solver;
mod types;

pub use board::{Board, WIN_LINES};
pub use game_state::GameState;
pub use solver::{best_move, max_value, min_value, utility};
pub use types::{GameError, GameStatus, Mark, Roles};
