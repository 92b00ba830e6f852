use super::board::Board;
use super::types::{GameStatus, Mark, Player, Position};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark, first_player: Player) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    pub fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::Human => self.human_mark,
            Player::Computer => self.computer_mark(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn place_move(&mut self, player: Player, pos: Position) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if !pos.is_in_bounds() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.set_move(pos, player) {
            return Err("Cell is already marked".to_string());
        }

        self.last_move = Some(pos);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        self.status = match self.board.winner() {
            Some(Player::Human) => GameStatus::HumanWon,
            Some(Player::Computer) => GameStatus::ComputerWon,
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
    }
}
