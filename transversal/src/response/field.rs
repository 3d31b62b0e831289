//! Field identity and change listener

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifies which field of a [`Response`](super::Response) was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseField {
    Status,
    Message,
    Data,
    Total,
    Errors,
}

impl ResponseField {
    /// All fields, in declaration order
    pub const ALL: [ResponseField; 5] = [
        Self::Status,
        Self::Message,
        Self::Data,
        Self::Total,
        Self::Errors,
    ];

    /// Field name as it appears in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Message => "message",
            Self::Data => "data",
            Self::Total => "total",
            Self::Errors => "errors",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback invoked synchronously after a field write.
///
/// It only receives the field identity; read the new value back from the
/// response if needed. Must not write to the firing response.
pub type ChangeListener = Arc<dyn Fn(ResponseField) + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let names: Vec<_> = ResponseField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["status", "message", "data", "total", "errors"]);
        assert_eq!(ResponseField::Errors.to_string(), "errors");
    }

    #[test]
    fn test_field_serde_matches_name() {
        for field in ResponseField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }
}
