//! Serde codec for the optional HTTP status
//!
//! `http::StatusCode` has no serde support, so the status travels as its
//! numeric code (`200`, `404`, ...) or `null` when unset.

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub(super) fn default_status() -> Option<StatusCode> {
    Some(StatusCode::OK)
}

pub(super) fn serialize<S>(status: &Option<StatusCode>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match status {
        Some(code) => serializer.serialize_some(&code.as_u16()),
        None => serializer.serialize_none(),
    }
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<StatusCode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u16>::deserialize(deserializer)?
        .map(|code| {
            StatusCode::from_u16(code)
                .map_err(|_| D::Error::custom(format!("invalid HTTP status code: {code}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super", default = "default_status")]
        status: Option<StatusCode>,
    }

    #[test]
    fn test_serialize_code_and_null() {
        let json = serde_json::to_string(&Holder {
            status: Some(StatusCode::NOT_FOUND),
        })
        .unwrap();
        assert_eq!(json, r#"{"status":404}"#);

        let json = serde_json::to_string(&Holder { status: None }).unwrap();
        assert_eq!(json, r#"{"status":null}"#);
    }

    #[test]
    fn test_deserialize() {
        let holder: Holder = serde_json::from_str(r#"{"status":401}"#).unwrap();
        assert_eq!(holder.status, Some(StatusCode::UNAUTHORIZED));

        let holder: Holder = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert_eq!(holder.status, None);

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.status, Some(StatusCode::OK));
    }

    #[test]
    fn test_deserialize_rejects_invalid_code() {
        let result = serde_json::from_str::<Holder>(r#"{"status":1000}"#);
        assert!(result.is_err());
    }
}
