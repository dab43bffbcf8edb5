//! Tolerant field decoders for backend responses, which are not strict about
//! nulls and number-vs-string encodings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String field that may arrive as null or as a number (phone numbers do)
pub fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Integer field that may arrive as null or as a numeric string; anything else is 0
pub fn number_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string_or_null")]
        text: String,
        #[serde(default, deserialize_with = "number_or_null")]
        number: i64,
    }

    fn decode(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_string_or_null() {
        assert_eq!(decode(r#"{"text": null}"#).text, "");
        assert_eq!(decode(r#"{"text": 9876543210}"#).text, "9876543210");
        assert_eq!(decode(r#"{"text": "abc"}"#).text, "abc");
        assert_eq!(decode("{}").text, "");
    }

    #[test]
    fn test_number_or_null() {
        assert_eq!(decode(r#"{"number": null}"#).number, 0);
        assert_eq!(decode(r#"{"number": "560001"}"#).number, 560001);
        assert_eq!(decode(r#"{"number": 42}"#).number, 42);
        assert_eq!(decode(r#"{"number": "n/a"}"#).number, 0);
    }
}
