//! Helpers shared by request types across route modules.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Deserializes an optional integer field leniently: accepts a JSON number
/// or a numeric string (clients send capacity and week both ways), treats
/// null and empty strings as absent.
pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("expected an integer")),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{s}' is not a valid integer"))),
        Some(_) => Err(de::Error::custom("expected an integer")),
    }
}

/// Treats `None` and whitespace-only strings alike when collecting the names
/// of required fields a body failed to supply.
pub fn push_if_blank<'a>(missing: &mut Vec<&'a str>, name: &'a str, value: &Option<String>) {
    if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
        missing.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_opt_i64")]
        capacity: Option<i64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Probe = serde_json::from_str(r#"{"capacity": 40}"#).unwrap();
        assert_eq!(p.capacity, Some(40));

        let p: Probe = serde_json::from_str(r#"{"capacity": "40"}"#).unwrap();
        assert_eq!(p.capacity, Some(40));
    }

    #[test]
    fn treats_null_empty_and_missing_as_absent() {
        for body in [r#"{}"#, r#"{"capacity": null}"#, r#"{"capacity": ""}"#] {
            let p: Probe = serde_json::from_str(body).unwrap();
            assert_eq!(p.capacity, None);
        }
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(serde_json::from_str::<Probe>(r#"{"capacity": "many"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"capacity": true}"#).is_err());
    }

    #[test]
    fn blank_detection() {
        let mut missing = Vec::new();
        push_if_blank(&mut missing, "topic", &None);
        push_if_blank(&mut missing, "week", &Some("  ".into()));
        push_if_blank(&mut missing, "date", &Some("2025-08-18".into()));
        assert_eq!(missing, vec!["topic", "week"]);
    }
}
