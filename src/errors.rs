use crate::config::GameConfigError;

#[derive(Debug, thiserror::Error)]
pub enum GameSenseError {
    #[error("Invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} bitmap")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    #[error("Line index {index} out of range (screen has {len} lines)")]
    LineIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid event range: min {min} > max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Screen is not a bitmap screen")]
    NotABitmapScreen,

    #[error("Configuration error: {0}")]
    Config(#[from] GameConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}
