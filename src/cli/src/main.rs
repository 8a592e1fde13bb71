mod config;
mod render;
mod repl;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use config::Config;
use cube_core::{
    Algorithm, CubeState, ParseError, commutator_notation, conjugate_notation, invert_notation,
    parse_algorithm,
};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use repl::{Reply, Session};
use std::{
    io::{self, Write},
    path::PathBuf,
};

/// Applies and analyses move sequences on a 3x3x3 Rubik's Cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `<config dir>/cube/config.toml` if it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an algorithm to a solved cube and report on the result
    Apply {
        /// The algorithm, e.g. "R U R' U'"
        alg: String,
    },
    /// Print the inverse of an algorithm
    Invert { alg: String },
    /// Print the conjugate A B A'
    Conjugate { a: String, b: String },
    /// Print the commutator A B A' B'
    Commutator { a: String, b: String },
    /// Print the corner and edge cycles an algorithm produces
    Cycles { alg: String },
    /// Print a random scramble
    Scramble {
        /// Number of moves; falls back to the configured length
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Start an interactive session on a single cube
    Repl,
}

/// Parse an argument, showing where it went wrong.
fn parse_arg(text: &str) -> color_eyre::Result<Algorithm> {
    parse_algorithm(text).map_err(|e| eyre!("{}", render::parse_error(text, &e)))
}

fn notation_arg(text: &str, result: Result<String, ParseError>) -> color_eyre::Result<String> {
    result.map_err(|e| eyre!("{}", render::parse_error(text, &e)))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Apply { alg } => {
            let cube = CubeState::from_algorithm(&parse_arg(&alg)?);
            println!("{}", render::state(&cube, &config));
        }
        Commands::Invert { alg } => {
            println!("{}", notation_arg(&alg, invert_notation(&alg))?);
        }
        Commands::Conjugate { a, b } => {
            parse_arg(&a)?;
            println!("{}", notation_arg(&b, conjugate_notation(&a, &b))?);
        }
        Commands::Commutator { a, b } => {
            parse_arg(&a)?;
            println!("{}", notation_arg(&b, commutator_notation(&a, &b))?);
        }
        Commands::Cycles { alg } => {
            let cube = CubeState::from_algorithm(&parse_arg(&alg)?);
            for report in [cube.corner_cycles()?, cube.edge_cycles()?] {
                println!("{}", render::cycle_report(&report, &config));
            }
            println!("order:   {}", cube.order()?);
        }
        Commands::Scramble { length, seed } => {
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let length = length.unwrap_or(config.scramble_length);
            info!("Generating a scramble of {length} moves");
            println!("{}", Algorithm::random(&mut rng, length));
        }
        Commands::Repl => run_repl(&config)?,
    }

    Ok(())
}

fn run_repl(config: &Config) -> color_eyre::Result<()> {
    eprintln!("{}", repl::HELP);
    let mut session = Session::default();
    let mut line = String::new();

    loop {
        eprint!("> ");
        io::stderr().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(&line, config) {
            Reply::Output(text) if text.is_empty() => {}
            Reply::Output(text) => println!("{text}"),
            Reply::Rejected(e) => eprintln!("{}", render::parse_error(line.trim(), &e)),
            Reply::Exit => break,
        }
    }

    eprintln!("Exiting");
    Ok(())
}
