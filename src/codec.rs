use crate::decode::{decode, decode_with_stats};
use crate::encode::{encode, encode_with_stats};
use crate::stats::Stats;
use crate::table::SymbolTable;
use crate::types::{Direction, SeparatorMode};

/// Conversion context holding the active word separator convention.
///
/// Every call is a pure function of the input and the mode held here, so a
/// mode change applies to the next call and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    table: SymbolTable,
}

impl Codec {
    pub fn new(mode: SeparatorMode) -> Self {
        Self {
            table: SymbolTable::new(mode),
        }
    }

    pub fn mode(&self) -> SeparatorMode {
        self.table.mode()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn set_separator_mode(&mut self, mode: SeparatorMode) {
        if self.table.mode() != mode {
            tracing::debug!(from = %self.table.mode(), to = %mode, "separator mode changed");
        }
        self.table.set_separator_mode(mode);
    }

    /// Text to Morse.
    pub fn encode(&self, text: &str) -> String {
        encode(&self.table, text)
    }

    /// Morse to text, lowercased.
    pub fn decode(&self, code: &str) -> String {
        decode(&self.table, code)
    }

    pub fn convert(&self, direction: Direction, input: &str) -> String {
        match direction {
            Direction::TextToMorse => self.encode(input),
            Direction::MorseToText => self.decode(input),
        }
    }

    pub fn convert_with_stats(&self, direction: Direction, input: &str) -> (String, Stats) {
        match direction {
            Direction::TextToMorse => encode_with_stats(&self.table, input),
            Direction::MorseToText => decode_with_stats(&self.table, input),
        }
    }
}
