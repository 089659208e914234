//! Upstream response layouts and their mapping onto [`Stats`].

use serde_json::Value;

use super::Stats;
use crate::core::StatsError;

/// The recognized upstream layouts, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `{"totalSolved": n, "easySolved": n, "mediumSolved": n, "hardSolved": n}`
    Flat,
    /// `{"solved": {"total": n, "easy": n, "medium": n, "hard": n}}`
    Nested,
}

struct Matcher {
    shape: Shape,
    matches: fn(&Value) -> bool,
    extract: fn(&Value) -> Stats,
}

/* Order matters: a body carrying both layouts is read as `Flat`. */
const MATCHERS: &[Matcher] = &[
    Matcher {
        shape: Shape::Flat,
        matches: |raw| raw.get("totalSolved").is_some_and(Value::is_number),
        extract: |raw| Stats {
            total: count(raw, "totalSolved"),
            easy: count(raw, "easySolved"),
            medium: count(raw, "mediumSolved"),
            hard: count(raw, "hardSolved"),
        },
    },
    Matcher {
        shape: Shape::Nested,
        matches: |raw| raw.get("solved").is_some_and(truthy),
        extract: |raw| {
            let solved = &raw["solved"];
            Stats {
                total: count(solved, "total"),
                easy: count(solved, "easy"),
                medium: count(solved, "medium"),
                hard: count(solved, "hard"),
            }
        },
    },
];

/// Which layout `raw` would be read as, if any.
pub fn detect_shape(raw: &Value) -> Option<Shape> {
    MATCHERS.iter().find(|m| (m.matches)(raw)).map(|m| m.shape)
}

/// Maps a raw upstream body onto [`Stats`].
///
/// # Errors
///
/// Returns [`StatsError::UnrecognizedShape`] when no known layout matches.
pub fn normalize(raw: &Value) -> Result<Stats, StatsError> {
    MATCHERS
        .iter()
        .find(|m| (m.matches)(raw))
        .map(|m| (m.extract)(raw))
        .ok_or_else(|| StatsError::UnrecognizedShape(describe(raw)))
}

fn count(obj: &Value, key: &str) -> Option<u64> {
    let v = obj.get(key)?;
    v.as_u64().or_else(|| {
        v.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn describe(raw: &Value) -> String {
    match raw {
        Value::Object(map) if map.is_empty() => "empty object".into(),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().take(8).map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
        Value::Array(_) => "array".into(),
        Value::String(_) => "string".into(),
        Value::Number(_) => "number".into(),
        Value::Bool(_) => "boolean".into(),
        Value::Null => "null".into(),
    }
}
