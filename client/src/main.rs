use clap::{Parser, Subcommand};
use client::error::ClientResult;
use client::network::ScoreClient;
use client::watch::LeaderboardWatcher;
use log::{info, warn};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to connect to
    #[arg(short = 's', long, default_value = "127.0.0.1:8080")]
    server: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report a player's current score
    Report {
        team: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },
    /// Print a team's leaderboard
    Leaderboard { team: String },
    /// Poll a team's leaderboard and print it whenever it changes
    Watch {
        team: String,

        /// Poll interval in milliseconds
        #[arg(short = 'i', long, default_value = "1000")]
        interval_ms: u64,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> ClientResult<()> {
    let client = ScoreClient::new(&args.server, Duration::from_millis(args.timeout_ms))?;

    match args.command {
        Command::Report { team, name, score } => {
            print!("{}", client.report(&team, &name, score).await?);
        }
        Command::Leaderboard { team } => {
            print!("{}", client.leaderboard(&team).await?);
        }
        Command::Watch { team, interval_ms } => {
            tokio::select! {
                _ = watch(&client, &team, Duration::from_millis(interval_ms.max(1))) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl+C, stopping watch");
                }
            }
        }
    }

    Ok(())
}

async fn watch(client: &ScoreClient, team: &str, period: Duration) {
    info!("Watching team {} on {}", team, client.base_url());

    let mut watcher = LeaderboardWatcher::new();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        match client.leaderboard(team).await {
            Ok(board) => {
                if let Some(board) = watcher.observe(board) {
                    println!("--- {} ---", team);
                    print!("{}", board);
                }
            }
            Err(e) => warn!("Failed to poll leaderboard: {}", e),
        }
    }
}
