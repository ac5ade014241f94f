use std::fmt;

use crate::games::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Side assignment for one game. Fixed at game start, never changes while
/// the game is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    pub human: Mark,
    pub bot: Mark,
}

impl Roles {
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.random_bool() {
            Self {
                human: Mark::X,
                bot: Mark::O,
            }
        } else {
            Self {
                human: Mark::O,
                bot: Mark::X,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The proposed cell is not in the current empty-cell set.
    InvalidAction(usize),
    /// Utility was requested for a board where the game has not ended.
    NotTerminal,
    /// A move arrived after the game ended.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidAction(index) => write!(f, "cell {} is not available", index),
            GameError::NotTerminal => write!(f, "the game has not ended"),
            GameError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
