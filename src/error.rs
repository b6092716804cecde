//! Error type for the edges of the pipeline (reading input, loading config).
//!
//! The hierarchy builder and the layout engine never fail; only I/O and
//! decoding can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: String,
    },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unsupported input format '{0}'; use csv, tsv, json or xlsx")]
    UnsupportedFormat(String),

    #[error("unknown view '{0}'; use tree, layers, canvas, json or details")]
    UnknownView(String),

    #[error("no account with identifier '{0}'")]
    UnknownAccount(String),

    #[error("the details view needs an account identifier")]
    MissingAccount,
}

pub type Result<T> = std::result::Result<T, FlowError>;
