use thiserror::Error as ThisError;

/// Fatal configuration/parse problems, detected before routing begins.
///
/// These always abort the whole run; contrast with an unroutable net,
/// which is recorded per-net and never surfaces as an `Err`.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    NonPositiveDimension { width: i64, height: i64 },

    #[error("penalties must be non-negative, got via={via}, wrong_direction={wrong_direction}")]
    NegativePenalty { via: i64, wrong_direction: i64 },

    #[error("point ({layer}, {x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        layer: i64,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("net '{name}' has {count} pin(s), at least 2 are required")]
    NetTooFewPins { name: String, count: usize },

    #[error("net name '{name}' is used more than once")]
    DuplicateNetName { name: String },

    #[error("malformed line {line_no}: {text}")]
    Malformed { line_no: usize, text: String },

    #[error("io error reading input")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
