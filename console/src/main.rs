mod config;
mod input;
mod render;
mod tictactoe_runner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::config::ConfigFile;
use common::games::SessionRng;
use common::games::tictactoe::Mark;
use common::{log, logger};

use config::{ConsoleConfig, get_config_path};
use tictactoe_runner::{RunnerOptions, SessionEnd, run_tictactoe_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a minimax computer opponent")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Log search decisions to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer's random opening move
    #[arg(long)]
    seed: Option<u64>,

    /// Your mark, x or o
    #[arg(long, value_parser = parse_mark)]
    mark: Option<Mark>,

    #[arg(long, conflicts_with = "second")]
    first: bool,

    #[arg(long)]
    second: bool,
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    Mark::parse(value).ok_or_else(|| format!("invalid mark '{}', expected x or o", value))
}

fn runner_options(args: &Args, config: &ConsoleConfig) -> RunnerOptions {
    let human_first = if args.first {
        Some(true)
    } else if args.second {
        Some(false)
    } else {
        config.human_first
    };

    RunnerOptions {
        human_mark: args.mark.or(config.human_mark),
        human_first,
        computer_move_delay: Duration::from_millis(config.computer_move_delay_ms),
        clear_screen: config.clear_screen,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_file: ConfigFile<ConsoleConfig> =
        ConfigFile::new(args.config.clone().unwrap_or_else(get_config_path));
    let config = config_file.load()?;
    log!("Loaded config from {}", config_file.path().display());

    let options = runner_options(&args, &config);
    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match run_tictactoe_game(&mut input, &mut output, &options, &mut rng)? {
        SessionEnd::Finished(status) => log!("Session ended with {:?}", status),
        SessionEnd::Quit => log!("Session ended without a result"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["tictactoe", "--mark", "o", "--second"]);
        let config = ConsoleConfig {
            human_mark: Some(Mark::X),
            human_first: Some(true),
            computer_move_delay_ms: 250,
            clear_screen: false,
        };

        let options = runner_options(&args, &config);

        assert_eq!(options.human_mark, Some(Mark::O));
        assert_eq!(options.human_first, Some(false));
        assert_eq!(options.computer_move_delay, Duration::from_millis(250));
        assert!(!options.clear_screen);
    }

    #[test]
    fn test_config_used_without_flags() {
        let args = Args::parse_from(["tictactoe"]);
        let config = ConsoleConfig {
            human_mark: Some(Mark::O),
            human_first: Some(true),
            ..ConsoleConfig::default()
        };

        let options = runner_options(&args, &config);

        assert_eq!(options.human_mark, Some(Mark::O));
        assert_eq!(options.human_first, Some(true));
    }

    #[test]
    fn test_first_and_second_conflict() {
        assert!(Args::try_parse_from(["tictactoe", "--first", "--second"]).is_err());
    }

    #[test]
    fn test_bad_mark_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe", "--mark", "z"]).is_err());
    }
}
