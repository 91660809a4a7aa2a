//! Petro Types
//!
//! This crate defines the core types shared across the petrocalc ecosystem
//! (currently `petro-formulas` and `petro-cli`): the formula descriptor, the
//! solve direction and the closed error taxonomy every calculation reports.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

mod error;
mod types;

pub use error::{ErrorKind, FormulaError, FormulaResult};
pub use types::{Direction, FormulaDescriptor, SolveTargets};
