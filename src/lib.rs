//! Bidirectional converter between plain text and International Morse code.
//!
//! The codec has two independent settings: the conversion [`Direction`] and
//! the [`SeparatorMode`] used between Morse words (`" / "` or seven spaces).
//! Symbols within an encoded word are separated by three spaces; the decoder
//! accepts any run of single spaces between symbols.
//!
//! Unsupported characters and unknown tokens are dropped rather than
//! reported, so every conversion succeeds and may simply produce less output.
//!
//! ```
//! use dotdash::{Codec, SeparatorMode};
//!
//! let mut codec = Codec::default();
//! assert_eq!(codec.encode("sos"), "...   ---   ...");
//! codec.set_separator_mode(SeparatorMode::Slash);
//! assert_eq!(codec.decode("... --- ... / ... --- ..."), "sos sos");
//! ```

pub mod codec;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod io_utils;
pub mod session;
pub mod stats;
pub mod table;
pub mod types;

pub use codec::Codec;
pub use config::Config;
pub use error::DotdashError;
pub use session::{Command, Session};
pub use stats::Stats;
pub use table::SymbolTable;
pub use types::{Direction, SeparatorMode};
