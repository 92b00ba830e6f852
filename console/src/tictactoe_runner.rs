use std::io::{BufRead, Write};
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{GameStatus, Mark, Player, TicTacToeGameState, select_computer_move};
use common::log;

use crate::input::{parse_numpad, parse_yes_no, read_line};
use crate::render::{CLEAR_SCREEN, render_board};

#[derive(Debug, Clone)]
pub struct RunnerOptions {
    pub human_mark: Option<Mark>,
    pub human_first: Option<bool>,
    pub computer_move_delay: Duration,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameStatus),
    /// Input ran out before the game ended.
    Quit,
}

struct Console<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }

    fn clean(&mut self) -> Result<(), String> {
        if self.clear_screen {
            self.write(CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, String> {
        self.write(text)?;
        read_line(&mut *self.input)
    }

    fn show_turn(&mut self, state: &TicTacToeGameState, player: Player) -> Result<(), String> {
        self.clean()?;
        let title = match player {
            Player::Human => "Human",
            Player::Computer => "Computer",
        };
        self.write(&format!("{} turn [{}]\n", title, state.mark_of(player)))?;
        self.write(&render_board(&state.board, state.human_mark))
    }
}

pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &RunnerOptions,
    rng: &mut SessionRng,
) -> Result<SessionEnd, String> {
    let mut console = Console {
        input,
        output,
        clear_screen: options.clear_screen,
    };

    console.clean()?;
    let Some(human_mark) = resolve_human_mark(&mut console, options.human_mark)? else {
        return quit(&mut console);
    };

    console.clean()?;
    let Some(human_first) = resolve_human_first(&mut console, options.human_first)? else {
        return quit(&mut console);
    };

    let first_player = if human_first {
        Player::Human
    } else {
        Player::Computer
    };
    let mut state = TicTacToeGameState::new(human_mark, first_player);
    log!(
        "New game: human plays {}, {:?} moves first, seed {}",
        human_mark,
        first_player,
        rng.seed()
    );

    while !state.is_over() {
        match state.current_player {
            Player::Human => {
                if !human_turn(&mut console, &mut state)? {
                    return quit(&mut console);
                }
            }
            Player::Computer => {
                computer_turn(&mut console, &mut state, rng)?;
                if !options.computer_move_delay.is_zero() {
                    std::thread::sleep(options.computer_move_delay);
                }
            }
        }
    }

    show_result(&mut console, &state)?;
    log!("Game finished: {:?}", state.status);
    Ok(SessionEnd::Finished(state.status))
}

fn quit<R: BufRead, W: Write>(console: &mut Console<'_, R, W>) -> Result<SessionEnd, String> {
    console.write("\nBye\n")?;
    Ok(SessionEnd::Quit)
}

fn resolve_human_mark<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    preset: Option<Mark>,
) -> Result<Option<Mark>, String> {
    if let Some(mark) = preset {
        return Ok(Some(mark));
    }
    loop {
        let Some(line) = console.prompt("\nChoose X or O\nChosen: ")? else {
            return Ok(None);
        };
        if let Some(mark) = Mark::parse(&line) {
            return Ok(Some(mark));
        }
    }
}

fn resolve_human_first<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    preset: Option<bool>,
) -> Result<Option<bool>, String> {
    if let Some(first) = preset {
        return Ok(Some(first));
    }
    loop {
        let Some(line) = console.prompt("First to start?[y/n]: ")? else {
            return Ok(None);
        };
        if let Some(first) = parse_yes_no(&line) {
            return Ok(Some(first));
        }
    }
}

/// Returns `false` when input runs out before a legal move arrives.
fn human_turn<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    state: &mut TicTacToeGameState,
) -> Result<bool, String> {
    console.show_turn(state, Player::Human)?;

    loop {
        let Some(line) = console.prompt("Use numpad (1..9): ")? else {
            return Ok(false);
        };

        let pos = match parse_numpad(&line) {
            Ok(pos) => pos,
            Err(e) => {
                console.write(&format!("{}\n", e))?;
                continue;
            }
        };

        match state.place_move(Player::Human, pos) {
            Ok(()) => return Ok(true),
            Err(e) => {
                log!("Rejected human move {}: {}", pos, e);
                console.write("Bad move\n")?;
            }
        }
    }
}

fn computer_turn<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    state: &mut TicTacToeGameState,
    rng: &mut SessionRng,
) -> Result<(), String> {
    console.show_turn(state, Player::Computer)?;

    let pos = select_computer_move(&state.board, rng)
        .ok_or_else(|| "Computer has no move on an open board".to_string())?;
    state
        .place_move(Player::Computer, pos)
        .map_err(|e| format!("Computer move {} rejected: {}", pos, e))
}

fn show_result<R: BufRead, W: Write>(
    console: &mut Console<'_, R, W>,
    state: &TicTacToeGameState,
) -> Result<(), String> {
    let message = match state.status {
        GameStatus::HumanWon => {
            console.show_turn(state, Player::Human)?;
            "YOU WIN!"
        }
        GameStatus::ComputerWon => {
            console.show_turn(state, Player::Computer)?;
            "YOU LOSE!"
        }
        GameStatus::Draw | GameStatus::InProgress => {
            console.clean()?;
            console.write(&render_board(&state.board, state.human_mark))?;
            "DRAW!"
        }
    };
    console.write(&format!("{}\n", message))
}
