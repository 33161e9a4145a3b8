use clap::Parser;
use std::fs;
use std::path::PathBuf;

use dotdash::io_utils::{init_logging, io_cli_error, simple_cli_error};
use dotdash::{Codec, Direction, SeparatorMode, Stats};

/// Decode an International Morse code file into lowercase text, one output
/// line per input line.
#[derive(Parser)]
struct Args {
    /// Input Morse file
    input: PathBuf,
    /// Output file path
    output: PathBuf,
    /// Words are separated by " / " instead of seven spaces
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
    let code = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading input file", &args.input, e))?;

    let codec = Codec::new(mode);
    let mut stats = Stats::new();
    let text = code
        .lines()
        .map(|line| {
            let (out, line_stats) = codec.convert_with_stats(Direction::MorseToText, line);
            stats.merge(&line_stats);
            out
        })
        .collect::<Vec<_>>()
        .join("\n");
    stats.report();

    fs::write(&args.output, &text)
        .map_err(|e| io_cli_error("writing output file", &args.output, e))?;

    if args.json {
        let mut out_json = serde_json::to_value(stats)
            .map_err(|e| simple_cli_error(&format!("formatting stats failed: {e}")))?;
        out_json["separator"] = serde_json::json!(mode);
        let pretty = serde_json::to_string_pretty(&out_json)
            .map_err(|e| simple_cli_error(&format!("formatting stats failed: {e}")))?;
        println!("{pretty}");
    }
    Ok(())
}
