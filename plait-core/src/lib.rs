mod error;
mod filter;
mod function;
mod value;

pub use error::PlaitError;
pub use filter::{Apply, ApplyFn, Capability, Filter, FilterSpec, LookupFn, Pass, Table};
pub use function::{
    Attributes, Block, Composed, Declared, FunctionObject, Input, Invocation, MAX_INPUTS,
    OutputFn, RawFn, Slurped, Spread, Wrapped, declare, input, wrap,
};
pub use value::Value;
