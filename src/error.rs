//! Navigation error types
//!
//! Only construction and configuration can fail. The per-tick API
//! (`set_state`, `update`, rotation, bursts) never returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid tunable {name}: {value} (must be finite and non-negative)")]
    InvalidTunable { name: &'static str, value: f64 },

    #[error("Unknown navigation state: {0}")]
    UnknownState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavigationError>;
