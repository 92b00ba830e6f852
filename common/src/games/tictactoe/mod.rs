mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod types;

pub use board::Board;
pub use bot_controller::select_computer_move;
pub use game_state::TicTacToeGameState;
pub use minimax::minimax;
pub use types::{
    BOARD_SIZE, CELL_COUNT, COMPUTER_WIN_SCORE, Cell, GameStatus, HUMAN_WIN_SCORE, Mark,
    NEUTRAL_SCORE, Player, Position, SearchResult,
};
