use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::minimax::minimax;
use super::types::{CELL_COUNT, Player, Position};

/// Picks the computer's next move, or `None` when the board is already decided or full.
///
/// An empty board gets a random opening: every opening draws under perfect
/// play, and a fixed one would be easy to learn against.
pub fn select_computer_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if board.is_terminal() {
        return None;
    }

    let available_moves = board.empty_cells();
    let depth = available_moves.len();

    if depth == CELL_COUNT {
        let pos = *rng.choose(&available_moves)?;
        log!("Random opening at {} (seed {})", pos, rng.seed());
        return Some(pos);
    }

    let mut search_board = *board;
    let result = minimax(&mut search_board, depth, Player::Computer);
    log!(
        "Minimax over {} empty cells picked {:?} with score {}",
        depth,
        result.position,
        result.score
    );
    result.position
}
