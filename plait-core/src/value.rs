use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::PlaitError;

/// A dynamically typed value passed into and out of function objects.
///
/// Arguments, filter results, and operation results all travel as `Value`s,
/// so a pipeline can mix stages of different shapes and let arity and filter
/// checks happen at invocation time.
///
/// # Examples
///
/// ```
/// use plait_core::Value;
///
/// let n = Value::from(13);
/// assert_eq!(n.as_int().unwrap(), 13);
///
/// let xs = Value::list([1, 2, 3]);
/// assert_eq!(xs.as_list().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Builds a list value from anything convertible into values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// The kind of this value, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the inner integer.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::Type`] if this is not an integer.
    pub fn as_int(&self) -> Result<i64, PlaitError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.type_error("integer")),
        }
    }

    /// Returns the value as a float, widening integers.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::Type`] if this is neither a float nor an integer.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Result<f64, PlaitError> {
        match self {
            Value::Float(x) => Ok(*x),
            Value::Int(n) => Ok(*n as f64),
            other => Err(other.type_error("number")),
        }
    }

    /// Returns the inner string slice.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::Type`] if this is not a string.
    pub fn as_str(&self) -> Result<&str, PlaitError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.type_error("string")),
        }
    }

    /// Returns the inner list as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::Type`] if this is not a list.
    pub fn as_list(&self) -> Result<&[Value], PlaitError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.type_error("list")),
        }
    }

    /// Coerces the value to a float: integers widen, floats pass through,
    /// and strings are parsed.
    ///
    /// This is the lenient numeric conversion filters reach for when an
    /// input may arrive as `5`, `5.0`, or `"5"`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::Type`] if the value is non-numeric or the
    /// string does not parse as a number.
    pub fn coerce_float(&self) -> Result<f64, PlaitError> {
        match self {
            Value::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| self.type_error("number")),
            other => other.as_float(),
        }
    }

    fn type_error(&self, expected: &'static str) -> PlaitError {
        PlaitError::Type {
            expected,
            found: self.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(13), Value::Int(13));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("five"), Value::Str("five".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(
            Value::list([1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn checked_accessors() {
        assert_eq!(Value::Int(4).as_int().unwrap(), 4);
        assert_eq!(Value::Int(4).as_float().unwrap(), 4.0);
        assert_eq!(Value::Float(0.5).as_float().unwrap(), 0.5);
        assert_eq!(Value::from("hi").as_str().unwrap(), "hi");
        assert_eq!(Value::list([1]).as_list().unwrap(), &[Value::Int(1)]);

        assert!(matches!(
            Value::from("hi").as_int(),
            Err(PlaitError::Type {
                expected: "integer",
                found: "string"
            })
        ));
        assert!(matches!(
            Value::Nil.as_float(),
            Err(PlaitError::Type {
                expected: "number",
                found: "nil"
            })
        ));
    }

    #[test]
    fn float_coercion() {
        assert_eq!(Value::Int(5).coerce_float().unwrap(), 5.0);
        assert_eq!(Value::Float(5.0).coerce_float().unwrap(), 5.0);
        assert_eq!(Value::from("5").coerce_float().unwrap(), 5.0);
        assert_eq!(Value::from(" 0.25 ").coerce_float().unwrap(), 0.25);
        assert!(Value::from("five").coerce_float().is_err());
        assert!(Value::Nil.coerce_float().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int(512).to_string(), "512");
        assert_eq!(Value::from("ok").to_string(), "ok");
        assert_eq!(Value::list([5, 12]).to_string(), "[5, 12]");
        assert_eq!(Value::Nil.to_string(), "");
    }
}
