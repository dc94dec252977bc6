//! Error handling module for the menus widget.
//!
//! Provides a single error type for fetching, decoding and configuration failures.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request could not be sent or the server answered with an error status
    Network(String),
    /// Response body was not a valid menu collection
    Decode(String),
    /// Local file could not be read
    Io(String),
    /// Invalid configuration value
    Config(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Network(_) => codes::NETWORK_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
            AppError::Io(_) => codes::IO_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Network(msg) => msg.clone(),
            AppError::Decode(msg) => msg.clone(),
            AppError::Io(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            AppError::Decode(format!("Invalid menus payload: {}", err))
        } else {
            AppError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("IO error: {:?}", err);
        AppError::Io(format!("IO error: {}", err))
    }
}
