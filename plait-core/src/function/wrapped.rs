use std::{fmt, sync::Arc};

use crate::{
    Block, FunctionObject, PlaitError, Value,
    filter::{Capability, FilterSpec},
};

/// The callable lifted by [`wrap`].
pub type RawFn =
    dyn Fn(&[Value], Option<&Block>) -> Result<Value, PlaitError> + Send + Sync;

/// Lifts an arbitrary callable into the function-object capability set.
///
/// The wrapped object declares no inputs of its own: invocation forwards
/// all positional arguments and the optional trailing callback straight to
/// the callable. This is how raw closures participate in composition.
///
/// # Examples
///
/// ```
/// use plait_core::{FunctionObject, Value, wrap};
///
/// let adds_three = wrap(|args, _| Ok(Value::Int(args[0].as_int()? + 3)));
/// assert_eq!(adds_three.invoke([10]).unwrap(), Value::Int(13));
/// ```
pub fn wrap<F>(raw: F) -> Wrapped
where
    F: Fn(&[Value], Option<&Block>) -> Result<Value, PlaitError> + Send + Sync + 'static,
{
    Wrapped { raw: Arc::new(raw) }
}

/// A raw callable lifted by [`wrap`].
#[derive(Clone)]
pub struct Wrapped {
    raw: Arc<RawFn>,
}

impl FunctionObject for Wrapped {
    fn invoke_with(&self, args: Vec<Value>, block: Option<&Block>) -> Result<Value, PlaitError> {
        (self.raw)(&args, block)
    }
}

impl fmt::Debug for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Wrapped(..)")
    }
}

/// A wrapped callable used as a filter is invoked with the raw argument.
/// It offers both capabilities; resolution prefers lookup.
impl FilterSpec for Wrapped {
    fn capability(self) -> Capability {
        let lookup = self.clone();
        Capability::Both {
            lookup: Arc::new(move |value: &Value| lookup.invoke_with(vec![value.clone()], None)),
            call: Arc::new(move |value| self.invoke_with(vec![value], None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_all_arguments() {
        let collect = wrap(|args, _| Ok(Value::List(args.to_vec())));
        assert_eq!(
            collect.invoke([1, 2, 3]).unwrap(),
            Value::list([1, 2, 3])
        );
        assert_eq!(
            collect.invoke(Vec::<Value>::new()).unwrap(),
            Value::List(Vec::new())
        );
    }

    #[test]
    fn forwards_the_block() {
        let yielder = wrap(|args, block| {
            let block = block.expect("a block is required");
            block(args)
        });
        let result = yielder.invoke_block([21], |vals| Ok(Value::Int(vals[0].as_int()? * 2)));
        assert_eq!(result.unwrap(), Value::Int(42));
    }
}
