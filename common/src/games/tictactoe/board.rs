use super::types::{
    BOARD_SIZE, COMPUTER_WIN_SCORE, Cell, HUMAN_WIN_SCORE, NEUTRAL_SCORE, Player, Position,
};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.is_in_bounds() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    /// Empty cells in row-major order. Search tie-breaking depends on this order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == Cell::Empty {
                    cells.push(Position::new(row, col));
                }
            }
        }
        cells
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }

    pub fn win(&self, player: Player) -> bool {
        let target = player.cell();
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(row, col)| self.cells[row][col] == target)
        })
    }

    /// True when either player holds a line. A full board without a line is not game over.
    pub fn game_over(&self) -> bool {
        self.win(Player::Human) || self.win(Player::Computer)
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn is_terminal(&self) -> bool {
        self.game_over() || self.is_full()
    }

    pub fn winner(&self) -> Option<Player> {
        if self.win(Player::Computer) {
            Some(Player::Computer)
        } else if self.win(Player::Human) {
            Some(Player::Human)
        } else {
            None
        }
    }

    /// Only a final score at a leaf; mid-game it just means nobody has won yet.
    pub fn evaluate(&self) -> i32 {
        match self.winner() {
            Some(Player::Computer) => COMPUTER_WIN_SCORE,
            Some(Player::Human) => HUMAN_WIN_SCORE,
            None => NEUTRAL_SCORE,
        }
    }

    pub fn set_move(&mut self, pos: Position, player: Player) -> bool {
        if self.get(pos) != Some(Cell::Empty) {
            return false;
        }
        self.cells[pos.row][pos.col] = player.cell();
        true
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Cell::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const H: Cell = Cell::Human;
    const C: Cell = Cell::Computer;

    #[test]
    fn test_new_board_has_nine_empty_cells_in_row_major_order() {
        let board = Board::new();
        let cells = board.empty_cells();

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[1], Position::new(0, 1));
        assert_eq!(cells[3], Position::new(1, 0));
        assert_eq!(cells[8], Position::new(2, 2));
    }

    #[test]
    fn test_empty_cells_skips_occupied() {
        let board = Board::from_rows([[H, E, C], [E, C, E], [H, E, E]]);
        let cells = board.empty_cells();

        assert_eq!(
            cells,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        assert_eq!(cells.len(), 9 - 4);
        assert_eq!(board.empty_count(), cells.len());
    }

    #[test]
    fn test_win_detects_every_line() {
        for line in LINES {
            let mut board = Board::new();
            for (row, col) in line {
                assert!(board.set_move(Position::new(row, col), Player::Human));
            }
            assert!(board.win(Player::Human), "line {:?}", line);
            assert!(!board.win(Player::Computer));
            assert!(board.game_over());
        }
    }

    #[test]
    fn test_win_requires_complete_line() {
        let board = Board::from_rows([[C, C, E], [H, H, E], [E, E, E]]);

        assert!(!board.win(Player::Computer));
        assert!(!board.win(Player::Human));
        assert!(!board.game_over());
    }

    #[test]
    fn test_evaluate_computer_win() {
        let board = Board::from_rows([[C, C, C], [H, H, E], [H, E, E]]);
        assert_eq!(board.evaluate(), 1);
    }

    #[test]
    fn test_evaluate_human_win() {
        let board = Board::from_rows([[H, C, C], [C, H, E], [E, E, H]]);
        assert_eq!(board.evaluate(), -1);
    }

    #[test]
    fn test_evaluate_full_board_draw() {
        let board = Board::from_rows([[H, C, H], [H, C, C], [C, H, H]]);

        assert!(board.is_full());
        assert!(!board.game_over());
        assert!(board.is_terminal());
        assert_eq!(board.evaluate(), 0);
    }

    #[test]
    fn test_evaluate_mid_game_is_neutral() {
        let board = Board::from_rows([[H, E, E], [E, C, E], [E, E, E]]);

        assert!(!board.is_terminal());
        assert_eq!(board.evaluate(), 0);
    }

    #[test]
    fn test_set_move_on_empty_cell() {
        let mut board = Board::new();

        assert!(board.set_move(Position::new(1, 2), Player::Computer));
        assert_eq!(board.get(Position::new(1, 2)), Some(Cell::Computer));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn test_set_move_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        assert!(board.set_move(Position::new(0, 0), Player::Human));
        let before = board;

        assert!(!board.set_move(Position::new(0, 0), Player::Computer));
        assert_eq!(board, before);
        assert_eq!(board.get(Position::new(0, 0)), Some(Cell::Human));
    }

    #[test]
    fn test_set_move_out_of_bounds() {
        let mut board = Board::new();

        assert!(!board.set_move(Position::new(3, 0), Player::Human));
        assert!(!board.set_move(Position::new(0, 3), Player::Human));
        assert_eq!(board, Board::new());
    }
}
