//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::cache::Ttl;

/// Request body for the SET operation (POST /set)
///
/// Every field is optional on the wire and defaults to an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
    /// Lifetime as a human duration string, e.g. `"30s"` or `"1h 30m"`
    #[serde(default)]
    pub duration: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }

    /// Parses `duration` into a TTL.
    ///
    /// A leading `-` yields an already-elapsed lifetime, so the entry is
    /// swept right after insertion. Empty, zero, or unparseable strings
    /// yield [`Ttl::Default`].
    pub fn ttl(&self) -> Ttl {
        let raw = self.duration.trim();
        let (negative, magnitude) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };

        match humantime::parse_duration(magnitude.trim_start()) {
            Ok(ttl) if ttl.is_zero() => Ttl::Default,
            Ok(ttl) if negative => Ttl::Elapsed(ttl),
            Ok(ttl) => Ttl::After(ttl),
            Err(_) => Ttl::Default,
        }
    }
}

/// Query string for the GET operation (GET /get?key=...)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetQuery {
    #[serde(default)]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(duration: &str) -> SetRequest {
        SetRequest {
            key: "k".to_string(),
            value: "v".to_string(),
            duration: duration.to_string(),
        }
    }

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello", "duration": "30s"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert_eq!(req.ttl(), Ttl::After(Duration::from_secs(30)));
    }

    #[test]
    fn test_set_request_missing_fields_default() {
        let req: SetRequest = serde_json::from_str(r#"{"key": "test"}"#).unwrap();
        assert_eq!(req.value, "");
        assert_eq!(req.duration, "");
        assert_eq!(req.ttl(), Ttl::Default);
    }

    #[test]
    fn test_ttl_parsing() {
        assert_eq!(request("100ms").ttl(), Ttl::After(Duration::from_millis(100)));
        assert_eq!(request("1s").ttl(), Ttl::After(Duration::from_secs(1)));
        assert_eq!(request("1.5s").ttl(), Ttl::After(Duration::from_millis(1500)));
        assert_eq!(request("2m").ttl(), Ttl::After(Duration::from_secs(120)));
        assert_eq!(request("1h30m").ttl(), Ttl::After(Duration::from_secs(5400)));
        assert_eq!(request("1h 30m").ttl(), Ttl::After(Duration::from_secs(5400)));
        assert_eq!(request("+5s").ttl(), Ttl::After(Duration::from_secs(5)));
        assert_eq!(request(" 5s ").ttl(), Ttl::After(Duration::from_secs(5)));
    }

    #[test]
    fn test_ttl_negative_is_elapsed() {
        assert_eq!(request("-1s").ttl(), Ttl::Elapsed(Duration::from_secs(1)));
        assert_eq!(request("-250ms").ttl(), Ttl::Elapsed(Duration::from_millis(250)));
        assert_eq!(request("-0s").ttl(), Ttl::Default);
    }

    #[test]
    fn test_ttl_empty_zero_or_invalid_is_default() {
        assert_eq!(request("").ttl(), Ttl::Default);
        assert_eq!(request("   ").ttl(), Ttl::Default);
        assert_eq!(request("0s").ttl(), Ttl::Default);
        assert_eq!(request("soon").ttl(), Ttl::Default);
        assert_eq!(request("-").ttl(), Ttl::Default);
        assert_eq!(request("--1s").ttl(), Ttl::Default);
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            ..request("")
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request("1s").validate().is_none());
    }

    #[test]
    fn test_get_query_deserialize() {
        let query: GetQuery = serde_json::from_str(r#"{"key": "abc"}"#).unwrap();
        assert_eq!(query.key, "abc");
    }
}
