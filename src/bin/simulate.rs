//! Simulate Binary
//!
//! Plays many seeded games of Cube with one strategy and reports how it did.
//!
//! Options: --games, --seed, --strategy, --show, --json

use clap::{Parser, ValueEnum};
use cube_game::{play_out, Cube, CubeConfig, ExtremeStrategy, RandomStrategy, SimulationStats, Strategy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Bet against the card farthest from the midpoint
    Extreme,
    /// Random live slot, random direction
    Random,
}

#[derive(Parser)]
#[command(author, version, about = "Simulate games of Cube", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 1000)]
    games: usize,

    /// Master seed; omit for a fresh run each time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy that picks each wager
    #[arg(long, value_enum, default_value_t = Policy::Extreme)]
    strategy: Policy,

    /// Print every final board
    #[arg(long)]
    show: bool,

    /// Print the totals as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let strategy: Box<dyn Strategy> = match args.strategy {
        Policy::Extreme => Box::new(ExtremeStrategy),
        Policy::Random => Box::new(RandomStrategy),
    };
    let config = match args.seed {
        Some(seed) => CubeConfig::new().with_seed(seed),
        None => CubeConfig::new(),
    };

    let mut master = config.rng();
    log::info!(
        "{:<24}{:<12}{:<12}seed {}",
        "simulating",
        args.games,
        strategy.name(),
        master.seed()
    );

    let mut stats = SimulationStats::new();
    for _ in 0..args.games {
        let mut rng = master.fork();
        let mut cube = Cube::shuffled(&mut rng)?;
        let summary = play_out(&mut cube, strategy.as_ref(), &mut rng)?;
        if args.show {
            println!("{}", cube);
        }
        stats.record(&summary);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}
