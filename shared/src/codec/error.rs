use thiserror::Error;

use crate::codec::Shape;

/// Errors that can occur while encoding or decoding wire payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Payload ended before the next field could be read
    #[error("payload ended early: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    /// String bytes were not valid UTF-8
    #[error("string field is not valid UTF-8")]
    InvalidString,

    /// Payload declared a different field count than the property's shape
    #[error("payload carries {actual} value fields, expected {expected} for {shape:?}")]
    ShapeMismatch {
        shape: Shape,
        expected: u8,
        actual: u8,
    },

    /// Bytes remained after the payload was fully decoded
    #[error("{count} trailing bytes after decoded payload")]
    TrailingBytes { count: usize },
}
