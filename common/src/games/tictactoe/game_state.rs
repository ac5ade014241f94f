use crate::games::GameRng;

use super::board::Board;
use super::solver;
use super::types::{GameError, GameStatus, Mark, Roles};

/// The live game the client owns: one board, one fixed role assignment,
/// mutated one mark per turn.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    roles: Roles,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new(rng: &mut GameRng) -> Self {
        Self::with_roles(Roles::random(rng))
    }

    pub fn with_roles(roles: Roles) -> Self {
        Self {
            board: Board::new(),
            roles,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roles(&self) -> Roles {
        self.roles
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn current_turn(&self) -> Mark {
        self.board.current_turn()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        self.board.winning_line()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.board.current_turn() == self.roles.bot
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.board.current_turn() == self.roles.human
    }

    /// Places the current turn's mark at `index` and re-derives the status.
    pub fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        self.board = self.board.apply(index)?;
        self.last_move = Some(index);
        self.update_status();
        Ok(())
    }

    /// Asks the solver for the bot's move and applies it. Returns the index
    /// that was played, or `None` when it is not the bot's turn.
    pub fn play_bot_turn(&mut self) -> Option<usize> {
        if !self.is_bot_turn() {
            return None;
        }

        let action = solver::best_move(&self.board, self.roles)?;
        if self.place_mark(action).is_err() {
            return None;
        }
        Some(action)
    }

    fn update_status(&mut self) {
        if let Some(mark) = self.board.winner() {
            self.status = match mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
