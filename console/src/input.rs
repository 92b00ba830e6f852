use std::io::BufRead;

use common::games::tictactoe::Position;

/// Next line without its terminator, or `None` once input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn parse_numpad(line: &str) -> Result<Position, String> {
    line.trim()
        .parse::<u32>()
        .ok()
        .and_then(Position::from_numpad)
        .ok_or_else(|| "Bad choice".to_string())
}

pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}
