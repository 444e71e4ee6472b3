//! Field conditions: a small serializable expression language deciding when a field is relevant.
pub mod expression;
mod formatter;
mod interpreter;

pub use expression::*;
