use thiserror::Error;

use crate::prize::PrizeId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("a wheel needs at least {min} segments, got {got}")]
    TooFewSegments { min: usize, got: usize },
    #[error("no segment carries {0:?}")]
    MissingPrize(PrizeId),
    #[error("{0:?} appears on more than one segment")]
    DuplicatePrize(PrizeId),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("turns must satisfy {min_allowed} <= min_turns <= max_turns, got {min}..={max}")]
    Turns { min_allowed: u32, min: u32, max: u32 },
    #[error("spin duration must satisfy 0 < min <= max, got {min}..={max} ms")]
    Duration { min: f64, max: f64 },
    #[error("edge margin must be within {low}..={high}, got {got}")]
    Margin { low: f64, high: f64, got: f64 },
    #[error("config is not valid JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
