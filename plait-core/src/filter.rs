//! Per-input transforms applied while constructing a function object.
//!
//! A filter specification is anything implementing [`FilterSpec`]. At
//! declaration time each specification is resolved once into a [`Filter`],
//! a fixed tagged variant, so no capability probing happens per call.
//!
//! The specifications provided here:
//!
//! - [`Pass`]: the pass-through sentinel, applies no transform
//! - [`Table`]: an ordered association table, used via indexed lookup
//! - [`Apply`]: lifts a plain closure into the invocation capability
//!
//! Every function-object type is itself a specification: using one as a
//! filter runs its full construct-then-invoke protocol on the raw argument,
//! which is the usual way to validate or coerce an input.

use std::{fmt, sync::Arc};

use crate::{PlaitError, Value};

/// The indexed-lookup capability of a filter specification.
pub type LookupFn = dyn Fn(&Value) -> Result<Value, PlaitError> + Send + Sync;

/// The direct-invocation capability of a filter specification.
pub type ApplyFn = dyn Fn(Value) -> Result<Value, PlaitError> + Send + Sync;

/// A resolved per-input transform.
///
/// Produced by [`Filter::resolve`] from a [`FilterSpec`] and applied to one
/// raw positional argument during construction.
#[derive(Clone)]
pub enum Filter {
    /// Returns the raw argument unchanged.
    Pass,
    /// Resolves the argument through an indexed lookup.
    Lookup(Arc<LookupFn>),
    /// Resolves the argument by direct invocation.
    Invoke(Arc<ApplyFn>),
}

impl Filter {
    /// Resolves a filter specification into its fixed dispatch form.
    ///
    /// Capabilities are consulted in a fixed order: the pass-through
    /// sentinel, then indexed lookup, then direct invocation. A
    /// specification that supports both lookup and invocation resolves to
    /// lookup, matching the behavior of mapping-style filters.
    ///
    /// # Errors
    ///
    /// Returns [`PlaitError::UnusableFilter`] if the specification supports
    /// neither capability.
    pub fn resolve(spec: impl FilterSpec) -> Result<Self, PlaitError> {
        Self::from_capability(spec.capability())
    }

    pub(crate) fn from_capability(capability: Capability) -> Result<Self, PlaitError> {
        match capability {
            Capability::Pass => Ok(Filter::Pass),
            Capability::Lookup(lookup) | Capability::Both { lookup, .. } => {
                Ok(Filter::Lookup(lookup))
            }
            Capability::Call(call) => Ok(Filter::Invoke(call)),
            Capability::None => Err(PlaitError::UnusableFilter),
        }
    }

    /// Applies the filter to one raw argument.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying lookup or invocation raises.
    pub fn apply(&self, raw: Value) -> Result<Value, PlaitError> {
        match self {
            Filter::Pass => Ok(raw),
            Filter::Lookup(lookup) => lookup(&raw),
            Filter::Invoke(call) => call(raw),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Pass => f.write_str("Pass"),
            Filter::Lookup(_) => f.write_str("Lookup(..)"),
            Filter::Invoke(_) => f.write_str("Invoke(..)"),
        }
    }
}

/// What a filter specification offers to [`Filter::resolve`].
pub enum Capability {
    /// No capability; resolution fails.
    None,
    /// The pass-through sentinel.
    Pass,
    /// Indexed lookup only.
    Lookup(Arc<LookupFn>),
    /// Direct invocation only.
    Call(Arc<ApplyFn>),
    /// Both; resolution prefers lookup.
    Both {
        lookup: Arc<LookupFn>,
        call: Arc<ApplyFn>,
    },
}

/// A value usable as a filter specification at declaration time.
pub trait FilterSpec {
    /// Reports the capabilities this specification supports.
    fn capability(self) -> Capability;
}

/// The pass-through sentinel: a filter specification meaning "no transform".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pass;

impl FilterSpec for Pass {
    fn capability(self) -> Capability {
        Capability::Pass
    }
}

/// An ordered association table usable as an indexed-lookup filter.
///
/// Lookup compares keys by value equality; a miss produces [`Value::Nil`],
/// following mapping semantics.
///
/// # Examples
///
/// ```
/// use plait_core::{Filter, Table, Value};
///
/// let codes = Table::from([(Value::from(1), Value::from("one"))]);
/// let filter = Filter::resolve(codes).unwrap();
///
/// assert_eq!(filter.apply(Value::from(1)).unwrap(), Value::from("one"));
/// assert_eq!(filter.apply(Value::from(9)).unwrap(), Value::Nil);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table(Vec<(Value, Value)>);

impl Table {
    #[must_use]
    pub fn new(entries: Vec<(Value, Value)>) -> Self {
        Self(entries)
    }
}

impl<const N: usize> From<[(Value, Value); N]> for Table {
    fn from(entries: [(Value, Value); N]) -> Self {
        Self(entries.into())
    }
}

impl FromIterator<(Value, Value)> for Table {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FilterSpec for Table {
    fn capability(self) -> Capability {
        let entries = self.0;
        Capability::Lookup(Arc::new(move |key: &Value| {
            Ok(entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Nil))
        }))
    }
}

/// Lifts a plain closure into the direct-invocation capability.
///
/// # Examples
///
/// ```
/// use plait_core::{Apply, Filter, Value};
///
/// let double = Filter::resolve(Apply(|v: Value| Ok(Value::Int(v.as_int()? * 2)))).unwrap();
/// assert_eq!(double.apply(Value::from(4)).unwrap(), Value::from(8));
/// ```
pub struct Apply<F>(pub F);

impl<F> FilterSpec for Apply<F>
where
    F: Fn(Value) -> Result<Value, PlaitError> + Send + Sync + 'static,
{
    fn capability(self) -> Capability {
        Capability::Call(Arc::new(self.0))
    }
}

/// Plain data offers neither lookup nor invocation, so resolving a bare
/// `Value` fails with [`PlaitError::UnusableFilter`].
impl FilterSpec for Value {
    fn capability(self) -> Capability {
        Capability::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_is_identity() {
        let filter = Filter::resolve(Pass).unwrap();
        for value in [
            Value::Nil,
            Value::from(13),
            Value::from("x"),
            Value::list([1, 2]),
        ] {
            assert_eq!(filter.apply(value.clone()).unwrap(), value);
        }
    }

    #[test]
    fn table_lookup_and_miss() {
        let table = Table::from([
            (Value::from(1), Value::from("one")),
            (Value::from(2), Value::from("two")),
        ]);
        let filter = Filter::resolve(table).unwrap();

        assert_eq!(filter.apply(Value::from(2)).unwrap(), Value::from("two"));
        assert_eq!(filter.apply(Value::from(3)).unwrap(), Value::Nil);
    }

    #[test]
    fn apply_invokes_the_closure() {
        let filter =
            Filter::resolve(Apply(|v: Value| Ok(Value::Int(v.as_int()? + 1)))).unwrap();
        assert_eq!(filter.apply(Value::from(9)).unwrap(), Value::from(10));
    }

    #[test]
    fn bare_values_are_rejected() {
        assert!(matches!(
            Filter::resolve(Value::Nil),
            Err(PlaitError::UnusableFilter)
        ));
        assert!(matches!(
            Filter::resolve(Value::from(7)),
            Err(PlaitError::UnusableFilter)
        ));
    }

    #[test]
    fn lookup_wins_over_invocation() {
        // A specification exposing both capabilities with different
        // behaviors: resolution must pick the lookup side.
        struct Either;

        impl FilterSpec for Either {
            fn capability(self) -> Capability {
                Capability::Both {
                    lookup: Arc::new(|_: &Value| Ok(Value::from("lookup"))),
                    call: Arc::new(|_: Value| Ok(Value::from("call"))),
                }
            }
        }

        let filter = Filter::resolve(Either).unwrap();
        assert_eq!(filter.apply(Value::Nil).unwrap(), Value::from("lookup"));
    }
}
