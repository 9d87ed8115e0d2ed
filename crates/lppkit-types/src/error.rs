/// Errors raised while validating, encoding or decoding typed values.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    /// The type identifier is not in the registry.
    #[error("unknown data type {0}")]
    UnknownType(u16),

    /// No values were supplied.
    #[error("empty value for data type {type_id}")]
    EmptyValue { type_id: u8 },

    /// The number of values does not match the type's dimension.
    #[error("data type {type_id} expects {expected} value(s), got {actual}")]
    DimensionMismatch {
        type_id: u8,
        expected: usize,
        actual: usize,
    },

    /// A negative value was given for an unsigned field.
    #[error("field {field} of data type {type_id} must be non-negative (got {value})")]
    NegativeValueNotAllowed { type_id: u8, field: usize, value: f64 },

    /// The scaled value does not fit the field's byte width.
    #[error("field {field} of data type {type_id} out of range (got {value})")]
    ValueOutOfRange { type_id: u8, field: usize, value: f64 },

    /// The payload length does not equal the type's total width.
    #[error("invalid buffer length for data type {type_id} ({actual} bytes, expected {expected})")]
    InvalidBufferLength {
        type_id: u8,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, TypeError>;
