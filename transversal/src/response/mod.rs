//! Response container
//!
//! [`Response<T>`] pairs a payload with an HTTP status, a message, an error
//! list and a record count. Service functions build one through the
//! factories and callers (usually a web layer) read it back to render a reply.
//!
//! ```
//! use transversal::{Response, StatusCode};
//!
//! let found = Response::ok_with_total("Users page", vec!["ana", "luis"], 40);
//! assert_eq!(found.status(), Some(StatusCode::OK));
//! assert_eq!(found.total(), 40);
//!
//! let missing = Response::<Vec<String>>::not_found(["user 7 does not exist"]);
//! assert_eq!(missing.message(), "Error");
//! assert_eq!(missing.errors(), ["user 7 does not exist"]);
//! ```
//!
//! Every setter notifies the registered listener, if any, after the write:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use transversal::{Response, ResponseField};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut response = Response::<i32>::default()
//!     .with_listener(move |field| sink.lock().unwrap().push(field));
//! response.set_data(5);
//!
//! assert_eq!(*seen.lock().unwrap(), [ResponseField::Data]);
//! ```

mod field;
#[cfg(feature = "axum")]
mod into_response;
mod status;

pub use field::{ChangeListener, ResponseField};

use crate::convert::{Convert, short_type_name};
use crate::error::ConversionError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Message carried by every error factory
pub const ERROR_MESSAGE: &str = "Error";

/// Outcome of an operation, generic over the payload type
#[derive(Serialize, Deserialize)]
pub struct Response<T> {
    #[serde(with = "status", default = "status::default_status")]
    status: Option<StatusCode>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: T,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(skip)]
    listener: Option<ChangeListener>,
}

impl<T> Response<T> {
    // ==================== Factories ====================

    /// 200 response with the given message and payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::ok_with_total(message, data, 0)
    }

    /// 200 response for one page of a larger collection
    pub fn ok_with_total(message: impl Into<String>, data: T, total: u64) -> Self {
        Self {
            status: Some(StatusCode::OK),
            message: message.into(),
            data,
            total,
            errors: Vec::new(),
            listener: None,
        }
    }

    /// Error response with a default payload and [`ERROR_MESSAGE`]
    ///
    /// Errors are kept in the given order, duplicates included.
    pub fn error<I, S>(status: StatusCode, errors: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            status: Some(status),
            message: ERROR_MESSAGE.to_string(),
            data: T::default(),
            total: 0,
            errors: errors.into_iter().map(Into::into).collect(),
            listener: None,
        }
    }

    /// 400 Bad Request
    pub fn bad_request<I, S>(errors: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::error(StatusCode::BAD_REQUEST, errors)
    }

    /// 401 Unauthorized
    pub fn unauthorized<I, S>(errors: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::error(StatusCode::UNAUTHORIZED, errors)
    }

    /// 404 Not Found
    pub fn not_found<I, S>(errors: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::error(StatusCode::NOT_FOUND, errors)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error<I, S>(errors: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, errors)
    }

    // ==================== Accessors ====================

    /// HTTP status, `None` when unset
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Human-readable outcome message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Response payload
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consume the response and return its payload
    pub fn into_data(self) -> T {
        self.data
    }

    /// Total record count when the payload is one page of a collection
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Error descriptions, in insertion order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the status is present and in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|status| status.is_success())
    }

    /// Set the status; `None` clears it
    pub fn set_status(&mut self, status: impl Into<Option<StatusCode>>) {
        self.status = status.into();
        self.notify(ResponseField::Status);
    }

    /// Set the message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.notify(ResponseField::Message);
    }

    /// Replace the payload
    pub fn set_data(&mut self, data: T) {
        self.data = data;
        self.notify(ResponseField::Data);
    }

    /// Set the total record count
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.notify(ResponseField::Total);
    }

    /// Replace the whole error list
    pub fn set_errors<I, S>(&mut self, errors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self.notify(ResponseField::Errors);
    }

    /// Append one error; notifies [`ResponseField::Errors`]
    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.notify(ResponseField::Errors);
    }

    // ==================== Change notification ====================

    /// Register the listener called after every field write.
    ///
    /// Replaces any previous listener.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: Fn(ResponseField) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
    }

    /// Builder form of [`set_listener`](Self::set_listener)
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(ResponseField) + Send + Sync + 'static,
    {
        self.set_listener(listener);
        self
    }

    /// Remove the registered listener, if any
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is registered
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    fn notify(&self, field: ResponseField) {
        if let Some(listener) = &self.listener {
            listener(field);
        }
    }

    // ==================== Type conversion ====================

    /// Reinterpret the payload as `Y`, keeping status, message, errors and total.
    ///
    /// A default payload becomes `Y::default()` without converting. If the
    /// conversion fails the whole response is replaced by a 500 response
    /// carrying a single error that names both types; this never panics.
    pub fn change_type<Y>(&self) -> Response<Y>
    where
        T: Default + PartialEq,
        Y: Convert<T> + Default,
    {
        let data = if self.data == T::default() {
            Y::default()
        } else {
            match Y::try_convert(&self.data) {
                Ok(data) => data,
                Err(err) => return conversion_failure::<T, Y>(&err),
            }
        };

        Response {
            status: self.status,
            message: self.message.clone(),
            data,
            total: self.total,
            errors: self.errors.clone(),
            listener: None,
        }
    }
}

fn conversion_failure<S, Y: Default>(err: &ConversionError) -> Response<Y> {
    tracing::warn!(
        from = std::any::type_name::<S>(),
        to = std::any::type_name::<Y>(),
        error = %err,
        "Payload conversion failed, replacing response with 500"
    );

    let detail = format!(
        "Error converting from type {} to type {}: Message: {}, InnerException: {}",
        short_type_name::<S>(),
        short_type_name::<Y>(),
        err,
        err.inner_message().unwrap_or_default()
    );
    Response::internal_server_error([detail])
}

impl<T: Default> Default for Response<T> {
    fn default() -> Self {
        Self {
            status: status::default_status(),
            message: String::new(),
            data: T::default(),
            total: 0,
            errors: Vec::new(),
            listener: None,
        }
    }
}

// The listener belongs to whoever registered it; copies start unobserved.
impl<T: Clone> Clone for Response<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            message: self.message.clone(),
            data: self.data.clone(),
            total: self.total,
            errors: self.errors.clone(),
            listener: None,
        }
    }
}

impl<T: PartialEq> PartialEq for Response<T> {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.message == other.message
            && self.data == other.data
            && self.total == other.total
            && self.errors == other.errors
    }
}

impl<T: Eq> Eq for Response<T> {}

impl<T: fmt::Debug> fmt::Debug for Response<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("message", &self.message)
            .field("data", &self.data)
            .field("total", &self.total)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
