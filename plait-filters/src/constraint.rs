//! Validation filters: reject an argument before construction completes.
//!
//! Each validator coerces its input to a float first, so a declaration can
//! accept `5`, `5.0`, or `"5"` and still enforce its invariant. A rejected
//! argument aborts the invocation with a [`PlaitError::Domain`] error
//! carrying a [`ConstraintError`]; the core adds no handling of its own.

use std::sync::Arc;

use plait_core::{Capability, FilterSpec, PlaitError, Value};
use thiserror::Error;

/// Errors raised when a constraint filter rejects an argument.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConstraintError {
    /// The value must not be zero.
    #[error("value must not be zero")]
    Zero,

    /// The value fell outside the allowed range.
    #[error("value {value} is outside the range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Coerces to a float and rejects exact zero.
///
/// The usual guard for divisor inputs.
///
/// # Examples
///
/// ```
/// use plait_core::{Filter, Value};
/// use plait_filters::constraint::NonZeroFloat;
///
/// let filter = Filter::resolve(NonZeroFloat).unwrap();
/// assert_eq!(filter.apply(Value::from("5")).unwrap(), Value::Float(5.0));
/// assert!(filter.apply(Value::from(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonZeroFloat;

impl FilterSpec for NonZeroFloat {
    fn capability(self) -> Capability {
        Capability::Call(Arc::new(|value| {
            let float = value.coerce_float()?;
            if float == 0.0 {
                return Err(PlaitError::domain(ConstraintError::Zero));
            }
            Ok(Value::Float(float))
        }))
    }
}

/// Coerces to a float and enforces an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded {
    pub min: f64,
    pub max: f64,
}

impl Bounded {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl FilterSpec for Bounded {
    fn capability(self) -> Capability {
        let Self { min, max } = self;
        Capability::Call(Arc::new(move |value| {
            let float = value.coerce_float()?;
            if !(min..=max).contains(&float) {
                return Err(PlaitError::domain(ConstraintError::OutOfRange {
                    value: float,
                    min,
                    max,
                }));
            }
            Ok(Value::Float(float))
        }))
    }
}
