use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("tick rate must be between 1 and {max} Hz, got {value}")]
    TickRate { value: u32, max: u32 },

    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,

    #[error("initial snake of length {length} does not fit on a {width}x{height} grid")]
    InitialSnakeOutOfBounds { length: u16, width: u16, height: u16 },

    #[error("growth reward {reward} can push the score past {max} on a {width}x{height} grid")]
    RewardOverflow {
        reward: u32,
        max: u32,
        width: u16,
        height: u16,
    },

    #[error("a {width}x{height} grid leaves no free cell for food")]
    NoRoomForFood { width: u16, height: u16 },
}

/// Returned when text does not name one of the four directions.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown direction {0:?}, expected one of up, down, left, right")]
pub struct ParseDirectionError(pub String);

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a global log subscriber is already installed")]
    AlreadyInstalled,
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}
