use super::types::{GameError, Mark};

/// The 8 winning index triples: rows, columns, diagonals. Scanned in this
/// order whenever a winner is looked up.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Immutable snapshot of the 9 cells, indexed 0-8 in row-major order.
///
/// Whose turn it is falls out of the mark counts: marks alternate starting
/// with X, so the turn is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; 9],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Indices of empty cells in ascending order. The solver's tie-breaking
    /// depends on this ordering.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn current_turn(&self) -> Mark {
        let x_count = self.cells.iter().filter(|&&mark| mark == Mark::X).count();
        let o_count = self.cells.iter().filter(|&&mark| mark == Mark::O).count();
        if x_count > o_count { Mark::O } else { Mark::X }
    }

    /// Returns a new board with the current turn's mark placed at `index`.
    /// The action selects where, never who.
    pub fn apply(&self, index: usize) -> Result<Board, GameError> {
        if index >= self.cells.len() || self.cells[index] != Mark::Empty {
            return Err(GameError::InvalidAction(index));
        }

        let mut next = *self;
        next.cells[index] = self.current_turn();
        Ok(next)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|(mark, _)| mark)
    }

    /// First completed line in `WIN_LINES` order, with its index triple.
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        for line in WIN_LINES {
            let [a, b, c] = line;
            let mark = self.cells[a];
            if mark != Mark::Empty && mark == self.cells[b] && mark == self.cells[c] {
                return Some((mark, line));
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_has_nine_empty_cells() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.current_turn(), Mark::X);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_turn_alternates_from_counts() {
        let board = Board::new();
        let board = board.apply(4).unwrap();
        assert_eq!(board.get(4), Some(X));
        assert_eq!(board.current_turn(), O);

        let board = board.apply(0).unwrap();
        assert_eq!(board.get(0), Some(O));
        assert_eq!(board.current_turn(), X);
    }

    #[test]
    fn test_apply_changes_exactly_one_cell() {
        let board = Board::from_cells([X, O, E, E, X, E, O, E, E]);
        for index in board.empty_cells() {
            let next = board.apply(index).unwrap();
            let changed = (0..9).filter(|&i| board.get(i) != next.get(i)).count();
            assert_eq!(changed, 1);
            assert_eq!(next.get(index), Some(board.current_turn()));
        }
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let board = Board::new().apply(4).unwrap();
        assert_eq!(board.apply(4), Err(GameError::InvalidAction(4)));
    }

    #[test]
    fn test_apply_rejects_out_of_range_index() {
        let board = Board::new();
        assert_eq!(board.apply(9), Err(GameError::InvalidAction(9)));
    }

    #[test]
    fn test_winner_with_empty_cells_remaining() {
        // O completed the middle row; the board is terminal despite empties.
        let board = Board::from_cells([X, E, X, O, O, O, X, E, E]);
        assert_eq!(board.winner(), Some(O));
        assert!(board.is_terminal());
        assert!(!board.is_full());
    }

    #[test]
    fn test_winning_line_reports_the_triple() {
        let board = Board::from_cells([X, O, X, O, X, O, X, E, E]);
        let (mark, line) = board.winning_line().unwrap();
        assert_eq!(mark, X);
        assert_eq!(line, [2, 4, 6]);
    }

    #[test]
    fn test_full_board_is_terminal_without_winner() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_last_empty_cell_keeps_board_live_until_applied() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, E]);
        assert_eq!(board.empty_cells(), vec![8]);
        assert!(!board.is_terminal());

        let board = board.apply(8).unwrap();
        assert!(board.is_terminal());
    }

    #[test]
    fn test_diagonal_win_detection() {
        let board = Board::from_cells([O, X, E, X, O, E, E, E, O]);
        assert_eq!(board.winner(), Some(O));

        let board = Board::from_cells([E, X, O, X, O, E, O, E, E]);
        assert_eq!(board.winner(), Some(O));
    }
}
