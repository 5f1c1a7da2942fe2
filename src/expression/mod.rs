//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub(crate) use eval::apply;

#[cfg(test)]
mod tests;
