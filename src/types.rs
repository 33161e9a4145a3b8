use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DotdashError;

/// Seven spaces between Morse words.
pub const SEVEN_SPACE_SEPARATOR: &str = "       ";
/// Slash token between Morse words.
pub const SLASH_SEPARATOR: &str = " / ";
/// Three spaces between symbols of one encoded word.
pub const LETTER_GAP: &str = "   ";

/// Word separator convention used in the Morse representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorMode {
    /// Words are separated by `" / "`.
    Slash,
    /// Words are separated by seven spaces.
    #[default]
    SevenSpace,
}

impl SeparatorMode {
    /// Full separator placed between two words.
    pub fn word_separator(self) -> &'static str {
        match self {
            SeparatorMode::Slash => SLASH_SEPARATOR,
            SeparatorMode::SevenSpace => SEVEN_SPACE_SEPARATOR,
        }
    }

    /// Table value of the space character.
    ///
    /// Under `SevenSpace` this is four spaces: together with the three
    /// space letter gap it makes up the seven space word separator.
    pub fn space_token(self) -> &'static str {
        match self {
            SeparatorMode::Slash => SLASH_SEPARATOR,
            SeparatorMode::SevenSpace => "    ",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SeparatorMode::Slash => SeparatorMode::SevenSpace,
            SeparatorMode::SevenSpace => SeparatorMode::Slash,
        }
    }
}

impl fmt::Display for SeparatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeparatorMode::Slash => f.write_str("slash"),
            SeparatorMode::SevenSpace => f.write_str("seven-space"),
        }
    }
}

impl FromStr for SeparatorMode {
    type Err = DotdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slash" | "/" => Ok(SeparatorMode::Slash),
            "seven-space" | "seven" | "7" => Ok(SeparatorMode::SevenSpace),
            other => Err(DotdashError::InvalidMode(other.to_string())),
        }
    }
}

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    TextToMorse,
    MorseToText,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::TextToMorse => Direction::MorseToText,
            Direction::MorseToText => Direction::TextToMorse,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TextToMorse => f.write_str("text-to-morse"),
            Direction::MorseToText => f.write_str("morse-to-text"),
        }
    }
}

impl FromStr for Direction {
    type Err = DotdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text-to-morse" | "encode" => Ok(Direction::TextToMorse),
            "morse-to-text" | "decode" => Ok(Direction::MorseToText),
            other => Err(DotdashError::InvalidDirection(other.to_string())),
        }
    }
}
