use common::games::tictactoe::{Board, Cell, Mark};

const RULE_LINE: &str = "---------------";
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub fn cell_symbol(cell: Cell, human_mark: Mark) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Human => human_mark.as_char(),
        Cell::Computer => human_mark.opponent().as_char(),
    }
}

pub fn render_board(board: &Board, human_mark: Mark) -> String {
    let mut out = format!("\n{}\n", RULE_LINE);
    for row in board.rows() {
        for &cell in row {
            out.push_str(&format!("| {} |", cell_symbol(cell, human_mark)));
        }
        out.push_str(&format!("\n{}\n", RULE_LINE));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Player, Position};

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new(), Mark::X);
        let expected = "\n---------------\n\
                        |   ||   ||   |\n---------------\n\
                        |   ||   ||   |\n---------------\n\
                        |   ||   ||   |\n---------------\n";

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_uses_chosen_marks() {
        let mut board = Board::new();
        board.set_move(Position::new(0, 0), Player::Human);
        board.set_move(Position::new(2, 2), Player::Computer);

        let rendered = render_board(&board, Mark::O);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[2], "| O ||   ||   |");
        assert_eq!(lines[6], "|   ||   || X |");
    }
}
