use clap::Parser;
use std::path::{Path, PathBuf};

use dotdash::io_utils::{init_logging, simple_cli_error};
use dotdash::SymbolTable;

/// Write the International Morse symbol table as CSV (`Char,Morse`).
#[derive(Parser)]
struct Args {
    /// Output CSV path
    output: PathBuf,
}

pub fn dump_table_to_csv(table: &SymbolTable, path: &Path) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Char", "Morse"])?;
    for (c, token) in table.entries() {
        wtr.write_record([c.to_string().as_str(), token])?;
    }
    wtr.flush()?;
    Ok(())
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
    dump_table_to_csv(&SymbolTable::default(), &args.output)
        .map_err(|e| simple_cli_error(&format!("Failed to write CSV: {e}")))?;
    Ok(())
}
