use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotdashError {
    /// Configuration file could not be interpreted.
    #[error("config error: {0}")]
    Config(String),

    /// Unrecognized word separator name.
    #[error("invalid separator mode: {0}")]
    InvalidMode(String),

    /// Unrecognized conversion direction name.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// Malformed JSON in a configuration file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
