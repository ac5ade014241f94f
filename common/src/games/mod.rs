mod game_rng;

pub mod tictactoe;

pub use game_rng::GameRng;
