//! Morse to text conversion.

use crate::stats::Stats;
use crate::table::SymbolTable;

/// Decode `code` and return the counts gathered along the way.
///
/// Words are split on the active word separator, tokens on single spaces.
/// Tokens without a table entry, including the empty tokens left by extra
/// spaces, contribute nothing. A word whose tokens are all unknown still
/// keeps its slot, so it shows up as a double space in the output.
pub fn decode_with_stats(table: &SymbolTable, code: &str) -> (String, Stats) {
    let mut stats = Stats::new();
    if code.is_empty() {
        return (String::new(), stats);
    }
    let mut words = Vec::new();
    for word in code.split(table.mode().word_separator()) {
        let mut decoded = String::new();
        for token in word.split(' ').filter(|t| !t.is_empty()) {
            stats.tick_input();
            match table.lookup_char(token) {
                Some(c) => {
                    decoded.push(c);
                    stats.log_symbol();
                }
                None => stats.log_dropped(),
            }
        }
        stats.log_word();
        words.push(decoded);
    }
    let out = words.join(" ").to_lowercase();
    tracing::trace!(
        symbols = stats.symbols,
        dropped = stats.dropped,
        mode = %table.mode(),
        "decoded morse"
    );
    (out, stats)
}

pub fn decode(table: &SymbolTable, code: &str) -> String {
    decode_with_stats(table, code).0
}
