use lppkit_types::TypeError;

/// Errors that can occur while building, encoding or decoding frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A value or payload was rejected by the type registry.
    #[error("{0}")]
    Type(#[from] TypeError),

    /// The buffer ends before the item header or payload is complete.
    #[error("buffer too short ({available} bytes, need {needed})")]
    BufferTooShort { needed: usize, available: usize },

    /// Appending would push the frame past its byte budget.
    #[error("frame budget exceeded ({size} bytes, max {max})")]
    BudgetExceeded { size: usize, max: usize },

    /// The requested budget is smaller than the current frame content.
    #[error("budget too small ({max} bytes, frame holds {size})")]
    BudgetTooSmall { max: usize, size: usize },

    /// The requested budget is negative.
    #[error("budget must not be negative (got {0})")]
    NegativeBudget(i64),
}

impl FrameError {
    /// The underlying registry error, if this is one.
    pub fn type_error(&self) -> Option<&TypeError> {
        match self {
            FrameError::Type(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
