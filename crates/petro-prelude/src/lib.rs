//! Petro Prelude
//!
//! This crate re-exports the most frequently used public items from the
//! petrocalc ecosystem (currently `petro-types` and `petro-formulas`).
//! Down-stream applications can depend on `petro-prelude` to avoid long import
//! lists and to stay insulated from internal module reshuffles.

#![deny(warnings)]
#![deny(missing_docs)]

// Shared value types --------------------------------------------------------------------------

pub use petro_types::{
    Direction, ErrorKind, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets,
};

// Formula contract & dispatch -----------------------------------------------------------------

pub use petro_formulas::{
    CalculatorError, FormulaCalculator, FormulaInputs, FormulaRegistry, InputParseError,
    PetroleumFormula, parse_assignment, resolve_direction,
};

// Built-in formulas ---------------------------------------------------------------------------

pub use petro_formulas::{
    DarcyFlow, DeclineCurve, MaterialBalance, ProductivityIndex, SimplifiedMaterialBalance,
    StandingCorrelation, VogelIpr,
};
