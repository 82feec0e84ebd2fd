mod config;
mod input;
mod renderer;
mod runner;

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::TicTacToeSession;
use common::{log, logger};
use tokio::io::BufReader;

use config::{Config, get_config_manager};
use input::InputParser;
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe for two players or against a bot")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,
    /// Delay before the bot moves, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        config.log.prefix.clone()
    };
    logger::init_logger(prefix, config.log.target())?;

    if let Some(e) = config_error {
        eprintln!("{}; using default settings", e);
        log!("Failed to load config, using defaults: {}", e);
    }

    let settings = config.session_settings(args.seed);
    settings.validate()?;

    let bot_delay = Duration::from_millis(args.bot_delay_ms.unwrap_or(config.bot.delay_ms));
    let session = TicTacToeSession::new(settings);
    let parser = InputParser::new(config.last_mode);
    log!("Starting with bot delay {:?}", bot_delay);

    let runner = GameRunner::new(session, parser, std::io::stdout(), bot_delay);
    runner
        .run(BufReader::new(tokio::io::stdin()), |mode| {
            if let Err(e) = config_manager.update_config(|c| c.last_mode = Some(mode)) {
                log!("Failed to remember last mode: {}", e);
            }
        })
        .await?;

    log!("Exiting");
    Ok(())
}
