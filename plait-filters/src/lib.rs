//! Ready-made filter specifications for Plait function objects.
//!
//! The recurring filter shapes are coercion (accept `5`, `5.0`, or `"5"`
//! and hand the output operation one canonical kind) and validation
//! (reject an argument before the output operation ever runs). This crate
//! packages both so declarations can say what they accept without
//! restating the same closures:
//!
//! ```
//! use plait_core::{FunctionObject, Value, declare, input};
//! use plait_filters::constraint::NonZeroFloat;
//!
//! let divides_two_by = declare(
//!     |at, _| Ok(Value::Float(2.0 / at["number"].as_float()?)),
//!     [input("number").filtered(NonZeroFloat)],
//! )
//! .unwrap();
//!
//! assert_eq!(divides_two_by.invoke(["5"]).unwrap(), Value::Float(0.4));
//! assert!(divides_two_by.invoke([0]).is_err());
//! ```

pub mod coerce;
pub mod constraint;

pub use coerce::{CoerceError, ToFloat, ToInt, ToStr};
pub use constraint::{Bounded, ConstraintError, NonZeroFloat};
