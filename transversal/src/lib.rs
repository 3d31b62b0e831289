//! Transversal response types
//!
//! A single generic [`Response<T>`] used to hand operation results from the
//! service layer to callers, with:
//! - factories for the common HTTP outcomes (200, 400, 401, 404, 500)
//! - synchronous change notification on every field write
//! - [`Response::change_type`] to reinterpret the payload through [`Convert`]
//!
//! With the `axum` feature (on by default) a `Response<T>` can be returned
//! straight from a handler.

pub mod convert;
pub mod error;
pub mod response;

// Re-exports
pub use convert::Convert;
pub use error::{ConversionError, ConversionResult};
pub use http;
pub use http::StatusCode;
pub use response::{ChangeListener, ERROR_MESSAGE, Response, ResponseField};
