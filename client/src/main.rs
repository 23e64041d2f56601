mod command;
mod config;
mod game_loop;
mod render;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, TicTacToeSession};
use common::{log, logger};
use common::config::Validate;
use tokio::io::BufReader;

use config::{CONFIG_FILE, get_config_manager};
use game_loop::run_game_loop;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// vs-player or vs-computer
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, normal or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    think_delay_ms: Option<u64>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if let Some(think_delay_ms) = args.think_delay_ms {
        config.game.think_delay_ms = think_delay_ms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = TicTacToeSession::new(&config.game, rng);
    log!("Session seed {}", session.seed());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_game_loop(&mut session, stdin, &mut stdout).await?;

    Ok(())
}
