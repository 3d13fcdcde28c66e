use rayon::prelude::*;

use chess_core::{Position, perft};

/// Depths whose expected count exceeds this are skipped unless FULL_PERFT is set.
const NODE_LIMIT: u64 = 1_000_000;

/// One EPD line: a position and its expected leaf counts per depth.
struct PerftCase {
    line: usize,
    fen: String,
    counts: Vec<(u8, u64)>,
}

// The positions in standard.epd never reach castling or en passant within the
// listed depths, so their published counts hold for the reduced rules.
fn parse_epd(data: &str) -> Vec<PerftCase> {
    data.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let mut fields = line.split(';').map(str::trim);
            let fen = fields.next().filter(|f| !f.is_empty())?;
            let mut counts: Vec<(u8, u64)> = fields
                .filter_map(|field| {
                    let (key, value) = field.split_once(' ')?;
                    let depth = key.strip_prefix('D')?.parse().ok()?;
                    let nodes = value.trim().parse().ok()?;
                    Some((depth, nodes))
                })
                .collect();
            counts.sort_by_key(|&(depth, _)| depth);
            Some(PerftCase {
                line: idx + 1,
                fen: fen.to_string(),
                counts,
            })
        })
        .collect()
}

#[test]
fn perft_from_standard_epd() {
    let full = std::env::var("FULL_PERFT").is_ok();
    let cases = parse_epd(include_str!("standard.epd"));
    assert_eq!(cases.len(), 4);
    assert!(cases.iter().all(|c| !c.counts.is_empty()));

    let failures: Vec<String> = cases
        .par_iter()
        .flat_map_iter(|case| {
            let pos = Position::from_fen(&case.fen).unwrap();
            case.counts
                .iter()
                .filter(move |&&(_, expected)| full || expected <= NODE_LIMIT)
                .filter_map(move |&(depth, expected)| {
                    let got = perft(&pos, depth);
                    (got != expected).then(|| {
                        format!(
                            "line {} '{}' depth {}: expected {}, got {}",
                            case.line, case.fen, depth, expected, got
                        )
                    })
                })
        })
        .collect();

    assert!(failures.is_empty(), "perft mismatches:\n{}", failures.join("\n"));
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Position::start_position(), 0), 1);
}

#[test]
fn perft_counts_start_position_moves() {
    let start = Position::start_position();
    assert_eq!(perft(&start, 1), 20);
    assert_eq!(perft(&start, 2), 400);
}

#[test]
fn perft_of_mated_position_is_zero() {
    let pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w").unwrap();
    assert_eq!(perft(&pos, 1), 0);
    assert_eq!(perft(&pos, 3), 0);
}
