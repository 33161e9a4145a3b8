use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use dotdash::io_utils::{init_logging, io_cli_error, simple_cli_error};
use dotdash::{Codec, Direction, SeparatorMode, Stats};

/// Encode a text file as International Morse code, one output line per
/// input line.
#[derive(Parser)]
struct Args {
    /// Input text file
    input: PathBuf,
    /// Output file path
    output: PathBuf,
    /// Separate words with " / " instead of seven spaces
    #[arg(long)]
    slash: bool,
    /// Print conversion counts as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mode = if args.slash {
        SeparatorMode::Slash
    } else {
        SeparatorMode::SevenSpace
    };
    let text = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading input file", &args.input, e))?;

    let start = Instant::now();
    let codec = Codec::new(mode);
    let mut stats = Stats::new();
    let morse = text
        .lines()
        .map(|line| {
            let (out, line_stats) = codec.convert_with_stats(Direction::TextToMorse, line);
            stats.merge(&line_stats);
            out
        })
        .collect::<Vec<_>>()
        .join("\n");
    let elapsed = start.elapsed();
    stats.report();

    fs::write(&args.output, &morse)
        .map_err(|e| io_cli_error("writing output file", &args.output, e))?;

    if args.json {
        let mut out_json = serde_json::to_value(stats)
            .map_err(|e| simple_cli_error(&format!("formatting stats failed: {e}")))?;
        out_json["separator"] = serde_json::json!(mode);
        out_json["elapsed_ms"] = serde_json::json!(elapsed.as_millis() as u64);
        let pretty = serde_json::to_string_pretty(&out_json)
            .map_err(|e| simple_cli_error(&format!("formatting stats failed: {e}")))?;
        println!("{pretty}");
    } else if stats.dropped > 0 {
        eprintln!(
            "Encoded {} symbols, ignored {} unsupported characters",
            stats.symbols, stats.dropped
        );
    }
    Ok(())
}
