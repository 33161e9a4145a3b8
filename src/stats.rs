//! `Stats` counts what a single conversion emitted and dropped. It carries no
//! timing and does no persistence; binaries report it as JSON.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Characters (encoding) or tokens (decoding) looked at.
    pub inputs: usize,
    /// Symbols written to the output.
    pub symbols: usize,
    /// Word boundaries written to the output.
    pub words: usize,
    /// Inputs that had no table entry.
    pub dropped: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_input(&mut self) {
        self.inputs += 1;
    }

    pub fn log_symbol(&mut self) {
        self.symbols += 1;
    }

    pub fn log_word(&mut self) {
        self.words += 1;
    }

    pub fn log_dropped(&mut self) {
        self.dropped += 1;
    }

    pub fn merge(&mut self, other: &Stats) {
        self.inputs += other.inputs;
        self.symbols += other.symbols;
        self.words += other.words;
        self.dropped += other.dropped;
    }

    pub fn report(&self) {
        tracing::info!(
            inputs = self.inputs,
            symbols = self.symbols,
            words = self.words,
            dropped = self.dropped,
            "conversion finished"
        );
    }
}
