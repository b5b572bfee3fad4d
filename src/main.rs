//! # Delve Main Entry Point
//!
//! Generates a dungeon from the command line and walks a player through it:
//! along a scripted list of moves, at random, or interactively from stdin.

use clap::Parser;
use delve::{
    legend, parse_moves, render_map, DelveError, DelveResult, Direction, DungeonConfig,
    DungeonGame, InputHandler, MoveOutcome, PlayerInput, UniformRandomizer,
};
use log::{error, info};
use std::io::{self, BufRead, Write};

/// Command line arguments for Delve.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Randomized cave dungeons with a treasure-hunting player")]
#[command(version)]
struct Args {
    /// Number of rows (at least 3)
    #[arg(short, long, default_value_t = 6)]
    rows: usize,

    /// Number of columns (at least 3)
    #[arg(short, long, default_value_t = 8)]
    cols: usize,

    /// Extra edges added on top of the spanning tree
    #[arg(short, long, default_value_t = 4)]
    interconnectivity: usize,

    /// Wrap the borders around
    #[arg(short, long)]
    wrap: bool,

    /// Percentage of caves holding treasure
    #[arg(short, long, default_value_t = 25)]
    treasure: u32,

    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scripted moves, e.g. "n,e,s,w" or "1 2 3 4"
    #[arg(short, long)]
    moves: Option<String>,

    /// Step limit for the random walk
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,

    /// Read commands from stdin
    #[arg(long)]
    interactive: bool,

    /// Print a JSON summary of the dungeon and exit
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> DelveResult<()> {
    initialize_logging(&args.log_level)?;
    info!("Starting Delve v{}", delve::VERSION);

    let config = DungeonConfig::new(args.rows, args.cols)
        .with_interconnectivity(args.interconnectivity)
        .with_wrapping(args.wrap)
        .with_treasure_percent(args.treasure);

    let mut rng = UniformRandomizer::from_seed(args.seed);
    let mut treasure_rng = UniformRandomizer::from_seed(args.seed.map(|s| s.wrapping_add(1)));
    let mut game = DungeonGame::new(&config, &mut rng, &mut treasure_rng)?;

    if args.json {
        let summary = game.dungeon().summary();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    game.create_player()?;
    game.add_player_to_dungeon()?;
    println!("{}\n", render_map(game.dungeon(), game.player_location().ok()));
    println!("{}\n", legend());
    println!("{}\n", game.player_location_description()?);

    if args.interactive {
        run_interactive(&mut game)?;
    } else if let Some(moves) = &args.moves {
        run_scripted(&mut game, &parse_moves(moves)?)?;
    } else {
        let report = game.wander(&mut rng, args.max_steps)?;
        println!(
            "Random walk: {} steps, {} blocked, reached end: {}",
            report.steps, report.blocked, report.reached_end
        );
    }

    println!("\n{}", game.player_description()?);
    Ok(())
}

/// Initializes `env_logger` at `log_level`; `RUST_LOG` takes precedence.
fn initialize_logging(log_level: &str) -> DelveResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            return Err(DelveError::InvalidInput(format!(
                "unknown log level '{}'",
                other
            )))
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
    Ok(())
}

fn run_scripted(game: &mut DungeonGame, moves: &[Direction]) -> DelveResult<()> {
    game.pick_treasure()?;
    for (step, &direction) in moves.iter().enumerate() {
        let outcome = game.move_player(direction)?;
        println!("{:>3}. {}: {}", step + 1, direction, outcome);
        if let MoveOutcome::Moved(_) = outcome {
            let collected = game.pick_treasure()?;
            if !collected.is_empty() {
                println!("     Picked up {}", collected);
            }
        }
        if game.has_reached_end()? {
            println!("Reached the end after {} moves", step + 1);
            break;
        }
    }
    Ok(())
}

fn run_interactive(game: &mut DungeonGame) -> DelveResult<()> {
    let handler = InputHandler::new();
    println!("{}", handler.help_text());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = match handler.parse_line(&line) {
            Ok(input) => input,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match input {
            PlayerInput::Move(direction) => {
                println!("{}", game.move_player(direction)?);
                println!("{}", game.player_location_description()?);
                if game.has_reached_end()? {
                    println!("You made it out!");
                    break;
                }
            }
            PlayerInput::PickUp => println!("Picked up {}", game.pick_treasure()?),
            PlayerInput::Look => println!("{}", game.player_location_description()?),
            PlayerInput::Status => println!("{}", game.player_description()?),
            PlayerInput::Map => {
                println!("{}", render_map(game.dungeon(), game.player_location().ok()))
            }
            PlayerInput::Help => println!("{}", handler.help_text()),
            PlayerInput::Quit => {
                info!("Player quit the game");
                break;
            }
        }
    }
    Ok(())
}
