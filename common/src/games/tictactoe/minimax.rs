use super::board::Board;
use super::types::{Player, SearchResult};

/// Exhaustive minimax. `depth` should be the number of empty cells so the
/// search always runs to a full board or a decisive win.
///
/// Computer maximizes and Human minimizes. Only strict improvements replace
/// the best move, so ties go to the first cell in row-major order. Every
/// tentative placement is undone before returning.
pub fn minimax(board: &mut Board, depth: usize, player: Player) -> SearchResult {
    if depth == 0 || board.is_terminal() {
        return SearchResult::leaf(board.evaluate());
    }

    let mut best = SearchResult::leaf(match player {
        Player::Computer => i32::MIN,
        Player::Human => i32::MAX,
    });

    for pos in board.empty_cells() {
        board.set_move(pos, player);
        let child = minimax(board, depth - 1, player.opponent());
        board.clear(pos);

        let improves = match player {
            Player::Computer => child.score > best.score,
            Player::Human => child.score < best.score,
        };

        if improves {
            best = SearchResult {
                position: Some(pos),
                score: child.score,
            };
        }
    }

    best
}
