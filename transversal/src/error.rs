//! Error types for payload conversion
//!
//! These errors never leave [`Response::change_type`](crate::Response::change_type);
//! they are folded into a 500 response there. They are public so that callers
//! using [`Convert`](crate::Convert) directly can inspect them.

use std::error::Error as StdError;
use thiserror::Error;

/// Failure to convert a payload from one type to another
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Text input could not be parsed into the target type
    #[error("Input string '{input}' was not in a correct format")]
    Format {
        input: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Numeric value does not fit the target type
    #[error("Value {value} was either too large or too small for {target}")]
    Overflow { value: String, target: &'static str },

    /// JSON value could not be deserialized into the target type
    #[error("JSON value could not be converted")]
    Json(#[from] serde_json::Error),
}

impl ConversionError {
    /// Create a Format error from the offending input and the parser error
    pub fn format(
        input: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Format {
            input: input.into(),
            source: Box::new(source),
        }
    }

    /// Create an Overflow error
    pub fn overflow(value: impl ToString, target: &'static str) -> Self {
        Self::Overflow {
            value: value.to_string(),
            target,
        }
    }

    /// Message of the underlying cause, if there is one
    pub fn inner_message(&self) -> Option<String> {
        self.source().map(|cause| cause.to_string())
    }
}

/// Result type for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;
