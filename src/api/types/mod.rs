//! API types - wire-format DTOs and errors

pub mod error;
pub mod json;
pub mod repeat;

pub use error::{ApiError, ApiErrorKind, ApiErrorResponse};
pub use json::Json;
pub use repeat::{ExamplesResponse, RepeatRequest, RepeatResponse};
