use thiserror::Error;

/// The error type for declaring, constructing, and invoking function objects.
///
/// Domain failures raised inside a filter or an output operation travel
/// through the [`Domain`](PlaitError::Domain) variant and are never caught,
/// retried, or rewrapped by this crate; they reach the original invoker
/// unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaitError {
    /// A declaration listed more inputs than the fixed cap allows.
    #[error("{given} inputs given when only {max} are allowed")]
    TooManyInputs { given: usize, max: usize },

    /// A declaration listed the same input name twice.
    #[error("duplicate input name `{0}`")]
    DuplicateInput(String),

    /// An invocation supplied the wrong number of positional arguments.
    #[error("wrong number of arguments ({given} for {expected})")]
    WrongArity { given: usize, expected: usize },

    /// A filter specification supports neither capability.
    #[error("filters must support indexed lookup or invocation")]
    UnusableFilter,

    /// A value accessor was used on a value of the wrong kind.
    #[error("expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    /// An error raised by a filter or an output operation.
    #[error("{0}")]
    Domain(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PlaitError {
    /// Wraps a consumer error for propagation through an invocation.
    pub fn domain<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Domain(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Rejected;

    impl fmt::Display for Rejected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "the value was rejected")
        }
    }

    impl std::error::Error for Rejected {}

    #[test]
    fn messages() {
        assert_eq!(
            PlaitError::TooManyInputs { given: 4, max: 3 }.to_string(),
            "4 inputs given when only 3 are allowed"
        );
        assert_eq!(
            PlaitError::WrongArity {
                given: 1,
                expected: 2
            }
            .to_string(),
            "wrong number of arguments (1 for 2)"
        );
        assert_eq!(
            PlaitError::UnusableFilter.to_string(),
            "filters must support indexed lookup or invocation"
        );
    }

    #[test]
    fn domain_errors_display_and_downcast() {
        let err = PlaitError::domain(Rejected);
        assert_eq!(err.to_string(), "the value was rejected");

        match err {
            PlaitError::Domain(inner) => {
                assert_eq!(inner.downcast_ref::<Rejected>(), Some(&Rejected));
            }
            other => panic!("expected a domain error, got {other:?}"),
        }
    }
}
