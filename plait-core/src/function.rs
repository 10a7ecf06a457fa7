mod composed;
mod declared;
mod slurped;
mod wrapped;

pub use composed::{Composed, Spread};
pub use declared::{Attributes, Declared, Input, Invocation, OutputFn, declare, input};
pub use slurped::Slurped;
pub use wrapped::{RawFn, Wrapped, wrap};

use crate::{PlaitError, Value};

/// Maximum number of declared inputs for a function object.
pub const MAX_INPUTS: usize = 3;

/// The optional trailing callback forwarded to an output operation.
///
/// Every layer (declared types, wrapped callables, composed pipelines,
/// slurp adapters) passes the callback through unchanged.
pub type Block = dyn Fn(&[Value]) -> Result<Value, PlaitError>;

/// The capability set shared by every function-object type.
///
/// A function object is a single invocable unit: it takes positional
/// arguments and an optional trailing callback, and returns exactly what its
/// output operation returns. Implementing [`invoke_with`] is all a type
/// needs; invocation sugar, composition, and adapters are provided.
///
/// Invoking never reuses state: each call constructs its own instance, runs
/// the output operation once, and discards it, so any function object can be
/// shared and invoked concurrently.
///
/// # Example
///
/// ```
/// use plait_core::{FunctionObject, Value, declare, input};
///
/// let adder = declare(
///     |at, _| Ok(Value::Int(at["number"].as_int()? + 2)),
///     [input("number")],
/// )
/// .unwrap();
///
/// assert_eq!(adder.invoke([13]).unwrap(), Value::Int(15));
///
/// let doubled = adder.clone() >> adder;
/// assert_eq!(doubled.invoke([3]).unwrap(), Value::Int(7));
/// ```
///
/// [`invoke_with`]: FunctionObject::invoke_with
pub trait FunctionObject {
    /// Invokes this function object with positional arguments and an
    /// optional trailing callback.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::WrongArity`] when the argument count does not
    /// match the declared inputs, and propagates unchanged anything raised
    /// by a filter or the output operation.
    fn invoke_with(&self, args: Vec<Value>, block: Option<&Block>) -> Result<Value, PlaitError>;

    /// Invokes with positional arguments and no trailing callback.
    ///
    /// # Errors
    ///
    /// See [`invoke_with`](FunctionObject::invoke_with).
    fn invoke<A>(&self, args: A) -> Result<Value, PlaitError>
    where
        Self: Sized,
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        self.invoke_with(args.into_iter().map(Into::into).collect(), None)
    }

    /// Invokes with positional arguments and a trailing callback.
    ///
    /// # Errors
    ///
    /// See [`invoke_with`](FunctionObject::invoke_with).
    fn invoke_block<A, F>(&self, args: A, block: F) -> Result<Value, PlaitError>
    where
        Self: Sized,
        A: IntoIterator,
        A::Item: Into<Value>,
        F: Fn(&[Value]) -> Result<Value, PlaitError> + 'static,
    {
        self.invoke_with(args.into_iter().map(Into::into).collect(), Some(&block))
    }

    /// Composes this object with `outer` under an explicit spread policy.
    ///
    /// The composed object invokes `self` first and feeds the result to
    /// `outer`; see [`Spread`] for how the result becomes `outer`'s
    /// arguments. Either operand may itself be a composed pipeline, so
    /// chains nest arbitrarily deep.
    fn compose<O>(self, outer: O, spread: Spread) -> Composed<Self, O>
    where
        Self: Sized,
        O: FunctionObject,
    {
        Composed::new(self, outer, spread)
    }

    /// Non-spreading composition: feeds this object's whole result to
    /// `outer` as its single argument.
    ///
    /// The spreading counterpart is the `>>` operator.
    fn then<O>(self, outer: O) -> Composed<Self, O>
    where
        Self: Sized,
        O: FunctionObject,
    {
        self.compose(outer, Spread::Single)
    }

    /// Adapts this object to accept one list argument whose elements become
    /// its positional arguments.
    fn slurp(self) -> Slurped<Self>
    where
        Self: Sized,
    {
        Slurped::new(self)
    }

    /// Borrows this object as a single-argument callable, for use wherever
    /// a mapping function is expected.
    ///
    /// ```
    /// use plait_core::{FunctionObject, Value, declare, input};
    ///
    /// let adder = declare(
    ///     |at, _| Ok(Value::Int(at["number"].as_int()? + 2)),
    ///     [input("number")],
    /// )
    /// .unwrap();
    ///
    /// let sums: Result<Vec<_>, _> = [1, 2, 3]
    ///     .map(Value::from)
    ///     .into_iter()
    ///     .map(adder.mapper())
    ///     .collect();
    /// assert_eq!(sums.unwrap(), vec![3.into(), 4.into(), 5.into()]);
    /// ```
    fn mapper(&self) -> impl Fn(Value) -> Result<Value, PlaitError> + '_
    where
        Self: Sized,
    {
        move |value| self.invoke_with(vec![value], None)
    }
}
