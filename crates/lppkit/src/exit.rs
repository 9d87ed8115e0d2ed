use std::fmt;
use std::io;

use lppkit_frame::FrameError;
use lppkit_json::JsonError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        io::ErrorKind::InvalidData => DATA_INVALID,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn json_error(context: &str, err: JsonError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use lppkit_types::TypeError;

    use super::*;

    #[test]
    fn codec_errors_are_data_invalid() {
        let err = frame_error("decode failed", FrameError::from(TypeError::UnknownType(153)));
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(err.message, "decode failed: unknown data type 153");
    }

    #[test]
    fn budget_overflow_is_data_invalid() {
        let err = json_error(
            "encode failed",
            JsonError::Frame(FrameError::BudgetExceeded { size: 8, max: 6 }),
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            err.message,
            "encode failed: frame budget exceeded (8 bytes, max 6)"
        );
    }

    #[test]
    fn io_permission_denied() {
        let err = io_error(
            "read failed",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
