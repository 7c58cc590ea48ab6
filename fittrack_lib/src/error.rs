//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding input validation failures.
#[derive(Debug)]
pub enum FitTrackError {
    /// An error from the underlying API client.
    Api(fittrack_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for FitTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for FitTrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<fittrack_api::Error> for FitTrackError {
    fn from(e: fittrack_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for FitTrackError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
