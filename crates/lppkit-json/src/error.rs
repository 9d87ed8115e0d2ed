use lppkit_frame::FrameError;

/// Errors that can occur when converting frames to or from JSON and base64.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The frame could not be built, encoded or decoded.
    #[error("{0}")]
    Frame(#[from] FrameError),

    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not valid base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// An array entry does not describe a reading.
    #[error("invalid entry {index}: {message}")]
    InvalidEntry { index: usize, message: String },
}

pub type Result<T> = std::result::Result<T, JsonError>;
