#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_targeting::{
    init_logging_with, print_player_view, print_probability_board, Dimensions, EngineConfig,
    GameStatus, GuessResult, Match, Ocean, SunkPolicy, TargetingEngine, World, SHIPS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = 10, help = "Board rows")]
    rows: usize,
    #[arg(long, default_value_t = 10, help = "Board columns")]
    columns: usize,
    #[arg(long, value_enum, default_value_t = Policy::Retain)]
    sunk_policy: Policy,
    #[arg(long, help = "Log level (overrides TARGETING_LOG)")]
    log: Option<log::LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Policy {
    Retain,
    Remove,
}

#[cfg(feature = "std")]
impl From<Policy> for SunkPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Retain => SunkPolicy::Retain,
            Policy::Remove => SunkPolicy::Remove,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a single match against a randomly placed fleet.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the board and probability map after every guess")]
        show: bool,
    },
    /// Play many seeded matches and print summary statistics as JSON.
    Bench {
        #[arg(long, default_value_t = 100)]
        games: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log);

    let world = World::new(Dimensions::new(cli.rows, cli.columns), SHIPS.to_vec());
    let config = EngineConfig {
        sunk_policy: cli.sunk_policy.into(),
        ..EngineConfig::default()
    };

    match cli.command {
        Commands::Play { seed, show } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let mut ocean = Ocean::random(&world, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut engine = TargetingEngine::with_config(&world, config)?;
            let mut game = Match::new(&mut engine, &mut ocean);
            while game.status() == GameStatus::InProgress {
                let (guess, result) = game.step()?;
                match result {
                    GuessResult::Hit => println!("{} -> hit", guess),
                    GuessResult::Miss => println!("{} -> miss", guess),
                    GuessResult::Sink(ship) => println!("{} -> sunk {}", guess, ship),
                }
                if show {
                    let engine = game.player();
                    print_player_view(engine);
                    print_probability_board(&engine.probability().pdf(engine.board()));
                }
            }
            let report = game.run()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Bench { games, seed } => {
            let mut guesses = Vec::with_capacity(games as usize);
            let mut wins = 0u64;
            for i in 0..games {
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
                let mut ocean =
                    Ocean::random(&world, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
                let mut engine = TargetingEngine::with_config(&world, config)?;
                let report = Match::new(&mut engine, &mut ocean).run()?;
                if report.won {
                    wins += 1;
                }
                guesses.push(report.guesses);
            }
            guesses.sort_unstable();
            let mean = if guesses.is_empty() {
                0.0
            } else {
                guesses.iter().sum::<usize>() as f64 / guesses.len() as f64
            };
            let result = json!({
                "games": games,
                "wins": wins,
                "mean_guesses": mean,
                "min_guesses": guesses.first(),
                "median_guesses": guesses.get(guesses.len() / 2),
                "max_guesses": guesses.last(),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}
