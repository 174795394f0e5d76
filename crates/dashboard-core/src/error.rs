//! Error Types for the Dashboard Engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Market data error: {0}")]
    Gateway(String),

    #[error("Quote unavailable for {0}")]
    QuoteUnavailable(String),

    #[error("Macro data unavailable: {0}")]
    MacroUnavailable(String),

    #[error("Input table error: {0}")]
    Table(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
