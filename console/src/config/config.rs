use common::config::Validate;
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Asked at startup when unset.
    pub human_mark: Option<Mark>,
    /// Asked at startup when unset.
    pub human_first: Option<bool>,
    pub computer_move_delay_ms: u64,
    pub clear_screen: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            human_mark: None,
            human_first: None,
            computer_move_delay_ms: 1000,
            clear_screen: true,
        }
    }
}
