use super::board::Board;
use super::types::{GameError, Mark, Roles};

/// Outcome of a finished game from the human's perspective: +1 when the
/// human's mark won, -1 when the bot's mark won, 0 for a draw.
pub fn utility(board: &Board, roles: Roles) -> Result<i32, GameError> {
    if !board.is_terminal() {
        return Err(GameError::NotTerminal);
    }
    Ok(terminal_value(board, roles))
}

fn terminal_value(board: &Board, roles: Roles) -> i32 {
    match board.winner() {
        Some(mark) if mark == roles.human => 1,
        Some(mark) if mark == roles.bot => -1,
        _ => 0,
    }
}

/// Exhaustive minimax move selection for the bot. Returns `None` on a
/// terminal board.
///
/// The best value is seeded above any reachable utility and only replaced on
/// a strict decrease while scanning empty cells in ascending order, so the
/// result is the lowest-index move reaching the minimum human-perspective
/// value. Ties never update.
pub fn best_move(board: &Board, roles: Roles) -> Option<usize> {
    if board.is_terminal() {
        return None;
    }

    let mut minimal_value = i32::MAX;
    let mut optimal_action = None;

    for action in board.empty_cells() {
        // actions come from empty_cells, apply cannot fail
        let successor = board.apply(action).unwrap();
        let value = minimal_value.min(max_value(&successor, roles));
        if value < minimal_value {
            minimal_value = value;
            optimal_action = Some(action);
        }
    }

    optimal_action
}

/// Value of `board` when the side favouring the human moves next.
pub fn max_value(board: &Board, roles: Roles) -> i32 {
    if board.is_terminal() {
        return terminal_value(board, roles);
    }

    let mut value = i32::MIN;
    for action in board.empty_cells() {
        let successor = board.apply(action).unwrap();
        value = value.max(min_value(&successor, roles));
    }
    value
}

/// Value of `board` when the side favouring the bot moves next.
pub fn min_value(board: &Board, roles: Roles) -> i32 {
    if board.is_terminal() {
        return terminal_value(board, roles);
    }

    let mut value = i32::MAX;
    for action in board.empty_cells() {
        let successor = board.apply(action).unwrap();
        value = value.min(max_value(&successor, roles));
    }
    value
}
