// Common error types for tmpl

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmplError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Manifest error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for TmplError {
    fn from(err: dialoguer::Error) -> Self {
        TmplError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TmplError>;

/// Human-facing rendering of a `TmplError` at the process boundary
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_tmpl_error(err: &TmplError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
