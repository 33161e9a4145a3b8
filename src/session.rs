//! Live conversion session.
//!
//! A [`Session`] keeps the raw input buffer together with the two user
//! selections (separator convention and direction) and re-renders its output
//! whenever any of them changes, the way a form re-converts on every key
//! release or checkbox click.

use crate::codec::Codec;
use crate::config::Config;
use crate::types::{Direction, SeparatorMode};

#[derive(Debug, Clone, Default)]
pub struct Session {
    codec: Codec,
    direction: Direction,
    buffer: String,
    output: String,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            codec: Codec::new(config.separator),
            direction: config.direction,
            buffer: String::new(),
            output: String::new(),
        }
    }

    pub fn separator_mode(&self) -> SeparatorMode {
        self.codec.mode()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Replace the input buffer and return the fresh output.
    pub fn update(&mut self, buffer: &str) -> &str {
        self.buffer.clear();
        self.buffer.push_str(buffer);
        self.render()
    }

    pub fn set_separator_mode(&mut self, mode: SeparatorMode) -> &str {
        self.codec.set_separator_mode(mode);
        self.render()
    }

    pub fn set_direction(&mut self, direction: Direction) -> &str {
        if self.direction != direction {
            tracing::debug!(from = %self.direction, to = %direction, "direction changed");
        }
        self.direction = direction;
        self.render()
    }

    pub fn toggle_separator_mode(&mut self) -> &str {
        self.set_separator_mode(self.codec.mode().toggled())
    }

    pub fn toggle_direction(&mut self) -> &str {
        self.set_direction(self.direction.toggled())
    }

    fn render(&mut self) -> &str {
        self.output = self.codec.convert(self.direction, &self.buffer);
        &self.output
    }
}

/// A line typed into a line-oriented front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMode(SeparatorMode),
    SetDirection(Direction),
    ToggleDirection,
    ToggleMode,
    Help,
    Quit,
    /// Anything that is not a directive is input text.
    Input(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        match line.trim() {
            ":slash" => Command::SetMode(SeparatorMode::Slash),
            ":seven" => Command::SetMode(SeparatorMode::SevenSpace),
            ":encode" => Command::SetDirection(Direction::TextToMorse),
            ":decode" => Command::SetDirection(Direction::MorseToText),
            ":flip" => Command::ToggleDirection,
            ":space" => Command::ToggleMode,
            ":help" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            _ => Command::Input(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a line to convert it. Directives:
  :slash   separate Morse words with \" / \"
  :seven   separate Morse words with seven spaces
  :space   toggle the word separator
  :encode  convert text to Morse
  :decode  convert Morse to text
  :flip    toggle the direction
  :quit    exit
Characters outside the International Morse table are ignored.";
