//! International Morse symbol table.
//!
//! The fixed entries cover uppercase letters, digits and the standard
//! punctuation set. The space entry is not stored: its value is derived from
//! the active [`SeparatorMode`] so that no shared table is ever mutated, and
//! the inverse view can never map a token back to a space.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::SeparatorMode;

/// Fixed character to token pairs, in table order.
pub const SYMBOLS: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

fn inverse() -> &'static HashMap<&'static str, char> {
    static INVERSE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    INVERSE.get_or_init(|| SYMBOLS.iter().map(|&(c, token)| (token, c)).collect())
}

/// Token for a non-space character, independent of any mode.
pub fn symbol_token(c: char) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|&&(sym, _)| sym == c)
        .map(|&(_, token)| token)
}

/// Mode-aware view of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolTable {
    mode: SeparatorMode,
}

impl SymbolTable {
    pub fn new(mode: SeparatorMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SeparatorMode {
        self.mode
    }

    /// Switch the value of the space entry. Applying the same mode twice is
    /// the same as applying it once.
    pub fn set_separator_mode(&mut self, mode: SeparatorMode) {
        self.mode = mode;
    }

    /// Token for an uppercase character, or the mode's space token for `' '`.
    pub fn lookup_morse(&self, c: char) -> Option<&'static str> {
        if c == ' ' {
            return Some(self.mode.space_token());
        }
        symbol_token(c)
    }

    /// Character for a token. Never yields a space.
    pub fn lookup_char(&self, token: &str) -> Option<char> {
        inverse().get(token).copied()
    }

    /// Fixed entries in table order, space excluded.
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> {
        SYMBOLS.iter().copied()
    }
}
