//! Defines data structures read from API responses.

use serde_json::Value;
use std::fmt;

/// The fields of interest from a `news` endpoint response.
///
/// The response body is not validated against a schema, so absent or
/// differently typed fields fall back to defaults.
#[derive(Debug, PartialEq)]
pub struct NewsSummary {
    pub status: String,
    pub count: i64,
    pub cache_status: String,
}

impl NewsSummary {
    /// Reads the summary fields from a response body. Returns `None`
    /// when the body is not a JSON object.
    pub fn from_value(body: &Value) -> Option<NewsSummary> {
        let obj = body.as_object()?;
        Some(NewsSummary {
            status: string_field(obj.get("status")),
            count: obj.get("count").and_then(Value::as_i64).unwrap_or(0),
            cache_status: string_field(obj.get("cache_status")),
        })
    }
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

impl fmt::Display for NewsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status: {}\nNews count: {}\nCache: {}",
            self.status, self.count, self.cache_status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields() {
        let body = json!({"status": "ok", "count": 3, "cache_status": "fresh"});
        let summary = NewsSummary::from_value(&body).unwrap();
        assert_eq!(
            summary.to_string(),
            "Status: ok\nNews count: 3\nCache: fresh"
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let summary = NewsSummary::from_value(&json!({})).unwrap();
        assert_eq!(summary.status, "unknown");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.cache_status, "unknown");
    }

    #[test]
    fn wrongly_typed_count_falls_back_to_zero() {
        let body = json!({"status": "ok", "count": "three"});
        let summary = NewsSummary::from_value(&body).unwrap();
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn non_object_body_has_no_summary() {
        assert_eq!(NewsSummary::from_value(&json!([1, 2, 3])), None);
        assert_eq!(NewsSummary::from_value(&json!("ok")), None);
    }
}
