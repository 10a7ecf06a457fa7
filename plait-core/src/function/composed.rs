use std::{ops::Shr, sync::Arc};

use super::{Declared, Slurped, Wrapped};
use crate::{
    Block, FunctionObject, PlaitError, Value,
    filter::{Capability, FilterSpec},
};

/// How a composed pipeline feeds the inner stage's result to the outer
/// stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// The result is passed whole, as the single positional argument.
    Single,
    /// A list result is unpacked into separate positional arguments; any
    /// other value is passed whole.
    Elements,
}

/// A two-stage pipeline built by [`compose`], [`then`], or `>>`.
///
/// Declares no inputs of its own: invocation runs `inner` with the
/// received arguments and trailing callback, feeds the result to `outer`
/// under the [`Spread`] policy, and returns `outer`'s result. Arity
/// mismatches between stages surface as [`PlaitError::WrongArity`] from
/// the outer stage's own constructor.
///
/// Either stage may itself be composed, so chains nest arbitrarily deep
/// and associate pairwise left-to-right.
///
/// [`compose`]: FunctionObject::compose
/// [`then`]: FunctionObject::then
#[derive(Debug, Clone)]
pub struct Composed<A, B> {
    inner: A,
    outer: B,
    spread: Spread,
}

impl<A, B> Composed<A, B>
where
    A: FunctionObject,
    B: FunctionObject,
{
    pub(crate) fn new(inner: A, outer: B, spread: Spread) -> Self {
        Self {
            inner,
            outer,
            spread,
        }
    }
}

impl<A, B> FunctionObject for Composed<A, B>
where
    A: FunctionObject,
    B: FunctionObject,
{
    fn invoke_with(&self, args: Vec<Value>, block: Option<&Block>) -> Result<Value, PlaitError> {
        let result = self.inner.invoke_with(args, block)?;
        let outer_args = match (self.spread, result) {
            (Spread::Elements, Value::List(items)) => items,
            (_, value) => vec![value],
        };
        self.outer.invoke_with(outer_args, block)
    }
}

/// A composed pipeline used as a filter runs end to end on the raw
/// argument. It offers both capabilities; resolution prefers lookup.
impl<A, B> FilterSpec for Composed<A, B>
where
    A: FunctionObject + Clone + Send + Sync + 'static,
    B: FunctionObject + Clone + Send + Sync + 'static,
{
    fn capability(self) -> Capability {
        let lookup = self.clone();
        Capability::Both {
            lookup: Arc::new(move |value: &Value| lookup.invoke_with(vec![value.clone()], None)),
            call: Arc::new(move |value| self.invoke_with(vec![value], None)),
        }
    }
}

// `a >> b` is spreading composition. Rust's `>` cannot return a composed
// value, so the non-spreading form is spelled `a.then(b)`.

impl<Rhs: FunctionObject> Shr<Rhs> for Declared {
    type Output = Composed<Declared, Rhs>;

    fn shr(self, outer: Rhs) -> Self::Output {
        self.compose(outer, Spread::Elements)
    }
}

impl<Rhs: FunctionObject> Shr<Rhs> for Wrapped {
    type Output = Composed<Wrapped, Rhs>;

    fn shr(self, outer: Rhs) -> Self::Output {
        self.compose(outer, Spread::Elements)
    }
}

impl<A, B, Rhs> Shr<Rhs> for Composed<A, B>
where
    A: FunctionObject,
    B: FunctionObject,
    Rhs: FunctionObject,
{
    type Output = Composed<Composed<A, B>, Rhs>;

    fn shr(self, outer: Rhs) -> Self::Output {
        self.compose(outer, Spread::Elements)
    }
}

impl<F, Rhs> Shr<Rhs> for Slurped<F>
where
    F: FunctionObject,
    Rhs: FunctionObject,
{
    type Output = Composed<Slurped<F>, Rhs>;

    fn shr(self, outer: Rhs) -> Self::Output {
        self.compose(outer, Spread::Elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{declare, input, wrap};

    fn adder() -> Declared {
        declare(
            |at, _| Ok(Value::Int(at["number"].as_int()? + 2)),
            [input("number")],
        )
        .unwrap()
    }

    fn pair() -> Declared {
        declare(
            |at, _| {
                let n = at["number"].as_int()?;
                Ok(Value::list([n, n + 1]))
            },
            [input("number")],
        )
        .unwrap()
    }

    fn summer() -> Declared {
        declare(
            |at, _| Ok(Value::Int(at["a"].as_int()? + at["b"].as_int()?)),
            [input("a"), input("b")],
        )
        .unwrap()
    }

    #[test]
    fn spreads_list_results_into_arguments() {
        let composed = pair() >> summer();
        assert_eq!(composed.invoke([10]).unwrap(), Value::Int(21));
    }

    #[test]
    fn passes_non_list_results_whole() {
        let composed = adder() >> adder();
        assert_eq!(composed.invoke([3]).unwrap(), Value::Int(7));
    }

    #[test]
    fn then_never_spreads() {
        let composed = pair().then(summer());
        assert!(matches!(
            composed.invoke([10]),
            Err(PlaitError::WrongArity {
                given: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn chains_compose_pairwise() {
        let chain = adder() >> adder() >> adder() >> adder();
        assert_eq!(chain.invoke([3]).unwrap(), Value::Int(11));
    }

    #[test]
    fn associativity_of_spreading_composition() {
        let left = (pair() >> summer()) >> adder();
        let right = pair() >> (summer() >> adder());
        assert_eq!(left.invoke([10]).unwrap(), right.invoke([10]).unwrap());
    }

    #[test]
    fn wrapped_callables_participate() {
        let adds_three = wrap(|args, _| Ok(Value::Int(args[0].as_int()? + 3)));
        let composed = adder() >> adds_three;
        assert_eq!(composed.invoke([10]).unwrap(), Value::Int(15));
    }

    #[test]
    fn blocks_pass_through_both_stages() {
        let splitter = pair();
        let mapper = declare(
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
        .unwrap();

        let composed = splitter.then(mapper);
        let result = composed.invoke_block([10], |vals| Ok(Value::Int(vals[0].as_int()? + 3)));
        // (10 + 3) + (11 + 3)
        assert_eq!(result.unwrap(), Value::Int(27));
    }
}
