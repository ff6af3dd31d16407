use std::path::PathBuf;
use thiserror::Error;

/// Common error type for everything outside the total rendering functions
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings file not found: {}", path.display())]
    SettingsNotFound { path: PathBuf },

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for CommonError {
    fn from(s: String) -> Self {
        CommonError::Generic(s)
    }
}

impl From<&str> for CommonError {
    fn from(s: &str) -> Self {
        CommonError::Generic(s.to_string())
    }
}

/// Common Result type alias
pub type CommonResult<T> = Result<T, CommonError>;
