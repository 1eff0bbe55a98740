//! Forgiving deserializers for data files and query strings.
//!
//! Numbers may arrive as JSON strings (`"7"`, `"10.5"`) and booleans as any
//! of `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, `y/n` in any case.
//! Anything else is still an error.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

pub fn parse_bool_token(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, 0/1, or one of true/false, yes/no, on/off, t/f, y/n")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        parse_bool_token(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // 7.0 is an integer, 7.5 is not
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a string holding one")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

pub fn deserialize_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_any(BoolVisitor)
}

/// For optional fields; pair with `#[serde(default)]`.
pub fn deserialize_opt_bool<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    deserialize_bool(deserializer).map(Some)
}

pub fn deserialize_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(IntVisitor)
}

pub fn deserialize_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(FloatVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_int")]
        id: i64,
        #[serde(deserialize_with = "deserialize_float")]
        price: f64,
        #[serde(deserialize_with = "deserialize_bool")]
        flag: bool,
    }

    fn row(json: &str) -> Result<Row, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_bool_tokens() {
        for token in ["1", "true", "True", "TRUE", "t", "yes", "Y", "on"] {
            assert_eq!(parse_bool_token(token), Some(true), "{}", token);
        }
        for token in ["0", "false", "False", "f", "no", "N", "OFF"] {
            assert_eq!(parse_bool_token(token), Some(false), "{}", token);
        }
        for token in ["", "maybe", "2", "yess"] {
            assert_eq!(parse_bool_token(token), None, "{}", token);
        }
    }

    #[test]
    fn test_native_json_types() {
        let r = row(r#"{"id": 7, "price": 10, "flag": true}"#).unwrap();
        assert_eq!((r.id, r.price, r.flag), (7, 10.0, true));
    }

    #[test]
    fn test_string_encoded_values() {
        let r = row(r#"{"id": "7", "price": "10.5", "flag": "yes"}"#).unwrap();
        assert_eq!((r.id, r.price, r.flag), (7, 10.5, true));

        let r = row(r#"{"id": 8.0, "price": 1, "flag": 0}"#).unwrap();
        assert_eq!((r.id, r.price, r.flag), (8, 1.0, false));
    }

    #[test]
    fn test_garbage_is_still_rejected() {
        assert!(row(r#"{"id": "seven", "price": 1, "flag": true}"#).is_err());
        assert!(row(r#"{"id": 7.5, "price": 1, "flag": true}"#).is_err());
        assert!(row(r#"{"id": 7, "price": "cheap", "flag": true}"#).is_err());
        assert!(row(r#"{"id": 7, "price": 1, "flag": "maybe"}"#).is_err());
        assert!(row(r#"{"id": 7, "price": 1, "flag": 2}"#).is_err());
        assert!(row(r#"{"id": 7, "price": 1, "flag": null}"#).is_err());
    }
}
