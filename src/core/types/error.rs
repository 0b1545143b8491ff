use std::io;

use thiserror::Error;

/// Contract-level failure raised by `WordStatistics::add_word`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("word must be present")]
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Incorrect tests detected, the reference implementation fails on: {}", .0.join(", "))]
    InvalidSuite(Vec<String>),
    #[error("Incorrect implementations passed the full suite, write some tests to kill: {}", .0.join(", "))]
    SurvivingMutants(Vec<String>),
    #[error("Unknown mutant: {0}")]
    UnknownMutant(String),
}

pub type AppResult<T> = Result<T, AppError>;
