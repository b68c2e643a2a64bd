//! Core error types for calc-util crate

use thiserror::Error;

/// Error type for span operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Span start lies after its end
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span reaches past the end of the source
    #[error("Span out of bounds: source has {len} bytes, span is {start}..{end}")]
    OutOfBounds { len: usize, start: usize, end: usize },

    /// Span edge falls inside a multi-byte character
    #[error("Span edge at byte {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
