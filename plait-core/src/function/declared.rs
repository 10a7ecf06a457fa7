use std::{fmt, ops::Index, sync::Arc};

use crate::{
    Block, FunctionObject, MAX_INPUTS, PlaitError, Value,
    filter::{Capability, Filter, FilterSpec},
};

/// The output operation of a declared function object.
///
/// Receives the resolved input attributes and the optional trailing
/// callback, and returns the invocation result.
pub type OutputFn =
    dyn Fn(&Attributes, Option<&Block>) -> Result<Value, PlaitError> + Send + Sync;

/// One declared input: a name plus a filter specification.
///
/// Built with [`input`]; the filter defaults to pass-through.
pub struct Input {
    name: String,
    capability: Capability,
}

/// Starts an input specification with the pass-through filter.
pub fn input(name: impl Into<String>) -> Input {
    Input {
        name: name.into(),
        capability: Capability::Pass,
    }
}

impl Input {
    /// Attaches a filter specification to this input.
    #[must_use]
    pub fn filtered(mut self, spec: impl FilterSpec) -> Self {
        self.capability = spec.capability();
        self
    }
}

/// Declares a function object: up to three named inputs, each with an
/// optional filter, and an output operation captured as a closure.
///
/// Filters are resolved here, once; invocation performs no capability
/// probing. Inputs are resolved against arguments in declaration order.
///
/// # Errors
///
/// Returns [`PlaitError::TooManyInputs`] when more than [`MAX_INPUTS`]
/// inputs are given (regardless of their filters),
/// [`PlaitError::DuplicateInput`] when two inputs share a name, and
/// [`PlaitError::UnusableFilter`] when a filter specification supports
/// neither indexed lookup nor invocation.
///
/// # Examples
///
/// ```
/// use plait_core::{FunctionObject, Value, declare, input};
///
/// let timeser_adder = declare(
///     |at, _| {
///         let adder = at["adder"].as_int()?;
///         let timeser = at["timeser"].as_int()?;
///         Ok(Value::Int(timeser * (adder + 2)))
///     },
///     [input("adder"), input("timeser")],
/// )
/// .unwrap();
///
/// assert_eq!(timeser_adder.invoke([13, 4]).unwrap(), Value::Int(60));
/// ```
pub fn declare<O>(
    output: O,
    inputs: impl IntoIterator<Item = Input>,
) -> Result<Declared, PlaitError>
where
    O: Fn(&Attributes, Option<&Block>) -> Result<Value, PlaitError> + Send + Sync + 'static,
{
    let inputs: Vec<Input> = inputs.into_iter().collect();
    if inputs.len() > MAX_INPUTS {
        return Err(PlaitError::TooManyInputs {
            given: inputs.len(),
            max: MAX_INPUTS,
        });
    }

    let mut resolved: Vec<(String, Filter)> = Vec::with_capacity(inputs.len());
    for spec in inputs {
        if resolved.iter().any(|(name, _)| *name == spec.name) {
            return Err(PlaitError::DuplicateInput(spec.name));
        }
        resolved.push((spec.name, Filter::from_capability(spec.capability)?));
    }

    Ok(Declared {
        inputs: Arc::new(resolved),
        output: Arc::new(output),
    })
}

/// A declared function-object type.
///
/// Immutable once produced and cheap to clone; clones share the declaration
/// and may be invoked concurrently. Each invocation constructs its own
/// [`Invocation`], runs the output operation once, and discards it.
#[derive(Clone)]
pub struct Declared {
    inputs: Arc<Vec<(String, Filter)>>,
    output: Arc<OutputFn>,
}

impl Declared {
    /// Number of declared inputs.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Constructs an instance from positional arguments.
    ///
    /// Arguments are resolved through their filters in declaration order
    /// and stored as named attributes. Construction is atomic: on any
    /// failure no partial instance is observable.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::WrongArity`] when the argument count does not
    /// match the declared input count, and propagates anything a filter
    /// raises.
    pub fn construct<A>(&self, args: A) -> Result<Invocation, PlaitError>
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        if args.len() != self.inputs.len() {
            return Err(PlaitError::WrongArity {
                given: args.len(),
                expected: self.inputs.len(),
            });
        }

        let mut entries = Vec::with_capacity(args.len());
        for ((name, filter), raw) in self.inputs.iter().zip(args) {
            entries.push((name.clone(), filter.apply(raw)?));
        }

        Ok(Invocation {
            attributes: Attributes { entries },
            output: Arc::clone(&self.output),
        })
    }
}

impl FunctionObject for Declared {
    fn invoke_with(&self, args: Vec<Value>, block: Option<&Block>) -> Result<Value, PlaitError> {
        self.construct(args)?.run(block)
    }
}

impl fmt::Debug for Declared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.inputs.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Declared")
            .field("inputs", &names)
            .finish_non_exhaustive()
    }
}

/// Using a declared type as a filter runs its full construct-then-invoke
/// protocol on the raw argument. It offers both capabilities; resolution
/// prefers lookup.
impl FilterSpec for Declared {
    fn capability(self) -> Capability {
        let lookup = self.clone();
        Capability::Both {
            lookup: Arc::new(move |value: &Value| lookup.invoke_with(vec![value.clone()], None)),
            call: Arc::new(move |value| self.invoke_with(vec![value], None)),
        }
    }
}

/// A constructed, ready-to-run instance of a declared function object.
///
/// Holds one resolved value per declared input. [`run`](Invocation::run)
/// consumes the instance, so each construction is used exactly once and
/// its attributes never escape.
pub struct Invocation {
    attributes: Attributes,
    output: Arc<OutputFn>,
}

impl Invocation {
    /// Runs the output operation and returns its result.
    ///
    /// # Errors
    ///
    /// Propagates whatever the output operation raises.
    pub fn run(self, block: Option<&Block>) -> Result<Value, PlaitError> {
        (self.output)(&self.attributes, block)
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// The resolved input values of one invocation, readable by name.
///
/// An `Attributes` value is only ever lent to the output operation; no
/// public accessor on the constructed instance exposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    /// The resolved value of the named input, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for Attributes {
    type Output = Value;

    /// Returns the resolved value of the named input.
    ///
    /// # Panics
    ///
    /// Panics if no input with that name was declared, like indexing a map
    /// with a missing key.
    fn index(&self, name: &str) -> &Value {
        self.get(name)
            .unwrap_or_else(|| panic!("no input named `{name}`"))
    }
}
