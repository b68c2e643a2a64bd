//! calc-util - Foundation types shared by the calc crates.
//!
//! Currently this is source location tracking: [`Span`] and the errors
//! raised when a span is resolved against a source string.

pub mod error;
pub mod span;

pub use error::{SpanError, SpanResult};
pub use span::Span;
