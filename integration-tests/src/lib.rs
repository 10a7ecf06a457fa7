//! Shared function-object fixtures used by the integration tests.
//!
//! These mirror the small cast the library grew up with: an adder, a
//! digit splitter, a two-input multiplier, and a validating divider.

use std::fmt;

use plait_core::{Declared, PlaitError, Value, declare, input};

/// One input `number`; returns `number + 2`.
pub fn adder() -> Declared {
    declare(
        |at, _| Ok(Value::Int(at["number"].as_int()? + 2)),
        [input("number")],
    )
    .expect("adder declares one input")
}

/// Inputs `adder` and `timeser`; returns `timeser * (adder + 2)`.
pub fn timeser_adder() -> Declared {
    declare(
        |at, _| {
            let adder = at["adder"].as_int()?;
            let timeser = at["timeser"].as_int()?;
            Ok(Value::Int(timeser * (adder + 2)))
        },
        [input("adder"), input("timeser")],
    )
    .expect("timeser_adder declares two inputs")
}

/// One input `number`; splits its decimal digits into a head digit and the
/// remaining digits, e.g. `512` becomes `[5, 12]`.
pub fn splitter() -> Declared {
    declare(
        |at, _| {
            let digits = at["number"].as_int()?.to_string();
            let parts = if digits.len() > 1 {
                let (head, tail) = digits.split_at(1);
                vec![parse_digits(head), parse_digits(tail)]
            } else {
                vec![parse_digits(&digits)]
            };
            Ok(Value::List(parts))
        },
        [input("number")],
    )
    .expect("splitter declares one input")
}

/// One input `number`; splits every decimal digit into its own element,
/// e.g. `123` becomes `[1, 2, 3]`.
pub fn digit_splitter() -> Declared {
    declare(
        |at, _| {
            let digits = at["number"].as_int()?.to_string();
            let parts = digits
                .chars()
                .map(|c| parse_digits(&c.to_string()))
                .collect();
            Ok(Value::List(parts))
        },
        [input("number")],
    )
    .expect("digit_splitter declares one input")
}

fn parse_digits(digits: &str) -> Value {
    Value::Int(digits.parse().expect("decimal digits"))
}

/// The domain error raised by [`validates_non_zero`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError;

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "number must not be zero")
    }
}

impl std::error::Error for ValidationError {}

/// One input `number`; coerces it to a float and raises [`ValidationError`]
/// when it coerces to zero.
pub fn validates_non_zero() -> Declared {
    declare(
        |at, _| {
            let number = at["number"].coerce_float()?;
            if number == 0.0 {
                return Err(PlaitError::domain(ValidationError));
            }
            Ok(Value::Float(number))
        },
        [input("number")],
    )
    .expect("validates_non_zero declares one input")
}

/// One input `number`, filtered through [`validates_non_zero`]; returns
/// `2.0 / number`.
pub fn divides_two_by() -> Declared {
    declare(
        |at, _| Ok(Value::Float(2.0 / at["number"].as_float()?)),
        [input("number").filtered(validates_non_zero())],
    )
    .expect("divides_two_by declares one input")
}

/// One input `number`; returns `number + yield(number * 2)`.
pub fn block_adder() -> Declared {
    declare(
        |at, block| {
            let number = at["number"].as_int()?;
            let block = block.expect("a block is required");
            let yielded = block(&[Value::Int(number * 2)])?;
            Ok(Value::Int(number + yielded.as_int()?))
        },
        [input("number")],
    )
    .expect("block_adder declares one input")
}

/// One input `arr`; maps each element through the block and sums the
/// results.
pub fn map_adder() -> Declared {
    declare(
        |at, block| {
            let block = block.expect("a block is required");
            let mut total = 0;
            for item in at["arr"].as_list()? {
                total += block(std::slice::from_ref(item))?.as_int()?;
            }
            Ok(Value::Int(total))
        },
        [input("arr")],
    )
    .expect("map_adder declares one input")
}
