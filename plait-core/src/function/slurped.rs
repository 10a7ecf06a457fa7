use std::sync::Arc;

use crate::{
    Block, FunctionObject, PlaitError, Value,
    filter::{Capability, FilterSpec},
};

/// Adapts a multi-input function object to a single list-argument call
/// site.
///
/// Built by [`slurp`](FunctionObject::slurp). Invocation accepts exactly
/// one argument; a list is forwarded element-wise to the adapted object,
/// any other value as-is. The adapted object is left unchanged.
///
/// # Examples
///
/// ```
/// use plait_core::{FunctionObject, Value, declare, input};
///
/// let summer = declare(
///     |at, _| Ok(Value::Int(at["a"].as_int()? + at["b"].as_int()?)),
///     [input("a"), input("b")],
/// )
/// .unwrap();
///
/// let slurped = summer.slurp();
/// assert_eq!(slurped.invoke([Value::list([2, 3])]).unwrap(), Value::Int(5));
/// ```
#[derive(Debug, Clone)]
pub struct Slurped<F> {
    inner: F,
}

impl<F: FunctionObject> Slurped<F> {
    pub(crate) fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FunctionObject> FunctionObject for Slurped<F> {
    fn invoke_with(&self, args: Vec<Value>, block: Option<&Block>) -> Result<Value, PlaitError> {
        let [arg]: [Value; 1] = args.try_into().map_err(|args: Vec<Value>| {
            PlaitError::WrongArity {
                given: args.len(),
                expected: 1,
            }
        })?;
        let forwarded = match arg {
            Value::List(items) => items,
            value => vec![value],
        };
        self.inner.invoke_with(forwarded, block)
    }
}

/// A slurp adapter used as a filter receives the raw argument as its one
/// list argument. It offers both capabilities; resolution prefers lookup.
impl<F> FilterSpec for Slurped<F>
where
    F: FunctionObject + Clone + Send + Sync + 'static,
{
    fn capability(self) -> Capability {
        let lookup = self.clone();
        Capability::Both {
            lookup: Arc::new(move |value: &Value| lookup.invoke_with(vec![value.clone()], None)),
            call: Arc::new(move |value| self.invoke_with(vec![value], None)),
        }
    }
}
