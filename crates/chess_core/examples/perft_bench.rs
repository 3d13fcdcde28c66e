//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 4 over the built-in positions
//!   cargo flamegraph --example perft_bench -p chess_core
//!
//!   # Custom depth and position (board and side-to-move fields)
//!   cargo flamegraph --example perft_bench -p chess_core -- 3 "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"

use chess_core::{Position, perft};
use std::env;
use std::process::ExitCode;
use std::time::Instant;

/// Positions whose counts do not depend on castling or en passant
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"),
    ("Promotions", "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b"),
];

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    // If FEN provided, use single position mode
    if let Some(fen) = args.get(2) {
        match Position::from_fen(fen) {
            Ok(pos) => run_single_position(&pos, depth),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        run_all_positions(depth);
    }
    ExitCode::SUCCESS
}

fn nodes_per_second(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn run_single_position(pos: &Position, depth: u8) {
    println!("Position: {}", pos.to_fen());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(pos, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nodes_per_second(nodes, elapsed.as_secs_f64()));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let Ok(pos) = Position::from_fen(fen) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = nodes_per_second(nodes, elapsed.as_secs_f64());
        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = nodes_per_second(total_nodes, total_time.as_secs_f64());
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
