mod autopilot;
mod config;
mod driver;

use clap::Parser;

use snake3d_engine::config::load_yaml;
use snake3d_engine::{SessionRng, SnakeGame, log, logger};

use config::RunnerConfig;

#[derive(Parser)]
#[command(name = "snake3d_runner")]
struct Args {
    /// Path to the YAML config file; defaults apply when it is missing.
    #[arg(long, default_value = config::CONFIG_FILE_NAME)]
    config: String,

    /// Session RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to play, overriding the config.
    #[arg(long)]
    games: Option<u32>,

    /// Tick budget per round, overriding the config.
    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let runner_config: RunnerConfig = load_yaml(&args.config)?;
    let games = args.games.unwrap_or(runner_config.games);
    let max_ticks = args.max_ticks.unwrap_or(runner_config.max_ticks);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut game = SnakeGame::new(runner_config.game, &mut rng);

    for round in 1..=games {
        let report = driver::run_round(&mut game, &mut rng, runner_config.autopilot, max_ticks).await;

        match report.reason {
            Some(reason) => log!(
                "Round {}/{}: {:?} after {} ticks. Score: {}, length: {}",
                round,
                games,
                reason,
                report.ticks,
                report.score,
                report.length
            ),
            None => log!(
                "Round {}/{}: tick budget reached after {} ticks. Score: {}, length: {}",
                round,
                games,
                report.ticks,
                report.score,
                report.length
            ),
        }
    }

    Ok(())
}
