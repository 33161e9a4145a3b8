//! Text to Morse conversion.
//!
//! Encoding runs in two passes. [`tokenize`] turns the uppercased input into
//! a sequence of symbol tokens and word gaps, dropping characters the table
//! does not know and collapsing runs of spaces. [`join`] then renders the
//! sequence, placing the letter gap between adjacent symbols and the mode's
//! word separator at each gap. Separators only ever sit between two symbols,
//! so the output never carries leading or trailing padding.

use crate::stats::Stats;
use crate::table::SymbolTable;
use crate::types::{SeparatorMode, LETTER_GAP};

/// One unit of encoder output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Dot/dash sequence of a single character.
    Symbol(&'static str),
    /// Boundary between two words.
    WordGap,
}

/// Split `text` into symbol tokens and word gaps.
///
/// A word gap is emitted only when a space run sits between two coded
/// symbols. Unsupported characters are dropped without closing the gap, so
/// `"A # B"` yields the same tokens as `"A B"`.
///
/// Leading spaces are treated like trailing ones and produce nothing. Older
/// converters emitted a stray separator for them (`" / .-"` for `" A"`).
pub fn tokenize(table: &SymbolTable, text: &str, stats: &mut Stats) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending_gap = false;
    for c in text.to_uppercase().chars() {
        stats.tick_input();
        if c == ' ' {
            pending_gap = true;
            continue;
        }
        match table.lookup_morse(c) {
            Some(symbol) => {
                if pending_gap && !tokens.is_empty() {
                    tokens.push(Token::WordGap);
                    stats.log_word();
                }
                pending_gap = false;
                tokens.push(Token::Symbol(symbol));
                stats.log_symbol();
            }
            None => stats.log_dropped(),
        }
    }
    tokens
}

/// Render tokens with separators between them.
pub fn join(tokens: &[Token], mode: SeparatorMode) -> String {
    let mut out = String::new();
    let mut prev = None;
    for &token in tokens {
        match token {
            Token::Symbol(symbol) => {
                if let Some(Token::Symbol(_)) = prev {
                    out.push_str(LETTER_GAP);
                }
                out.push_str(symbol);
            }
            Token::WordGap => out.push_str(mode.word_separator()),
        }
        prev = Some(token);
    }
    out
}

/// Encode `text` and return the counts gathered along the way.
pub fn encode_with_stats(table: &SymbolTable, text: &str) -> (String, Stats) {
    let mut stats = Stats::new();
    let tokens = tokenize(table, text, &mut stats);
    let out = join(&tokens, table.mode());
    tracing::trace!(
        symbols = stats.symbols,
        dropped = stats.dropped,
        mode = %table.mode(),
        "encoded text"
    );
    (out, stats)
}

pub fn encode(table: &SymbolTable, text: &str) -> String {
    encode_with_stats(table, text).0
}
