//! Coercion filters: canonicalize an argument's kind before construction.

use std::sync::Arc;

use plait_core::{Capability, FilterSpec, PlaitError, Value};
use thiserror::Error;

/// Errors raised by the stock coercions.
///
/// Reaches the invoker as a [`PlaitError::Domain`] error.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoerceError {
    /// The value's kind has no sensible conversion to the target.
    #[error("cannot coerce {found} to {target}")]
    Unsupported {
        found: &'static str,
        target: &'static str,
    },

    /// The string did not parse as a number.
    #[error("cannot parse `{0}` as a number")]
    Unparsable(String),
}

/// Coerces to a float: integers widen, floats pass through, strings parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToFloat;

impl FilterSpec for ToFloat {
    #[allow(clippy::cast_precision_loss)]
    fn capability(self) -> Capability {
        Capability::Call(Arc::new(|value| {
            let float = match &value {
                Value::Int(n) => *n as f64,
                Value::Float(x) => *x,
                Value::Str(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| PlaitError::domain(CoerceError::Unparsable(s.clone())))?,
                other => {
                    return Err(PlaitError::domain(CoerceError::Unsupported {
                        found: other.type_name(),
                        target: "float",
                    }));
                }
            };
            Ok(Value::Float(float))
        }))
    }
}

/// Coerces to an integer: floats truncate toward zero, strings parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToInt;

impl FilterSpec for ToInt {
    #[allow(clippy::cast_possible_truncation)]
    fn capability(self) -> Capability {
        Capability::Call(Arc::new(|value| {
            let int = match &value {
                Value::Int(n) => *n,
                Value::Float(x) => x.trunc() as i64,
                Value::Str(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| PlaitError::domain(CoerceError::Unparsable(s.clone())))?,
                other => {
                    return Err(PlaitError::domain(CoerceError::Unsupported {
                        found: other.type_name(),
                        target: "integer",
                    }));
                }
            };
            Ok(Value::Int(int))
        }))
    }
}

/// Coerces any value to its string rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToStr;

impl FilterSpec for ToStr {
    fn capability(self) -> Capability {
        Capability::Call(Arc::new(|value| Ok(Value::Str(value.to_string()))))
    }
}
