//! Chess CLI
//!
//! Play against the minimax engine in the terminal.

use anyhow::{bail, Context, Result};
use chess_cli::{play, HumanSide, PlayConfig};
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Terminal chess against a minimax engine");
    println!();
    println!("Usage:");
    println!("  chess [--config FILE] [--depth D] [--human-color white|black|none]");
    println!();
    println!("Options:");
    println!("  --config, -c       TOML file with depth, human_color and max_moves");
    println!("  --depth, -d        Search depth in plies (default: 3)");
    println!("  --human-color      Side the human plays; 'none' lets the engine play itself");
    println!();
    println!("Set RUST_LOG=debug to see search details on stderr.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `None` when only usage was requested.
fn parse_args(args: &[String]) -> Result<Option<PlayConfig>> {
    let mut config_path: Option<&str> = None;
    let mut depth: Option<u8> = None;
    let mut human: Option<HumanSide> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--config needs a file path");
                };
                config_path = Some(value.as_str());
                i += 1;
            }
            "--depth" | "-d" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--depth needs a number");
                };
                depth = Some(value.parse().with_context(|| format!("invalid depth '{}'", value))?);
                i += 1;
            }
            "--human-color" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--human-color needs white, black or none");
                };
                human = Some(value.parse()?);
                i += 1;
            }
            "help" | "--help" | "-h" => return Ok(None),
            other => bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };
    if let Some(depth) = depth {
        config.depth = depth;
    }
    if let Some(human) = human {
        config.human_color = human;
    }
    Ok(Some(config.normalized()))
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_usage();
            std::process::exit(2);
        }
    };

    println!("Game of Chess: you against a minimax engine");
    let stdin = io::stdin();
    play(&config, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
