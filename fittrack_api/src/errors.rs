//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (connection failure, invalid URL,
    /// or the response body could not be read).
    #[error("request failed: {0}")]
    Transport(String),
    /// The request was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("request cancelled")]
    Cancelled,
    /// The API returned a non-success status. The message is extracted from
    /// the error body when possible, otherwise derived from the status text.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },
    /// The response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}
