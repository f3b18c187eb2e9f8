//! Raw, unvalidated conversion input.

use serde_json::Value;

/// Input as received at a transport boundary, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum NumeralInput {
    /// No value was supplied (missing parameter, blank string or JSON null).
    Absent,
    /// An integral number.
    Integer(i64),
    /// A number that did not parse as an integer.
    Float(f64),
    /// Something that is not a number at all.
    Text(String),
}

impl NumeralInput {
    /// Decode a query-string parameter.
    ///
    /// Integer parsing is tried before float parsing so that `"3.14"` is
    /// reported as numeric-but-fractional rather than as non-numeric.
    /// Non-finite floats (`NaN`, `inf`) are treated as text.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Absent;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Integer(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Float(f),
            _ => Self::Text(raw.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<i64> for NumeralInput {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for NumeralInput {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for NumeralInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T> From<Option<T>> for NumeralInput
where
    T: Into<NumeralInput>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// JSON values keep their own type: a string is text even when it holds digits.
impl From<&Value> for NumeralInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}
