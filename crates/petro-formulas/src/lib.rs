#![deny(warnings)]
//! Petroleum engineering formula calculators.
//!
//! This crate provides the `PetroleumFormula` trait, the `FormulaInputs`
//! request type and the built-in reservoir and production engineering
//! formulas. Each formula solves for one of two unknowns (its forward target
//! or a single inverse target) with a closed-form equation and reports every
//! validation failure as a typed `FormulaError`.
//!
//! ```
//! use petro_formulas::{FormulaCalculator, FormulaInputs};
//!
//! let calculator = FormulaCalculator::new();
//! let inputs = FormulaInputs::new()
//!     .with("k", 0.1)
//!     .with("A", 100.0)
//!     .with("deltaP", 500.0)
//!     .with("mu", 2.0)
//!     .with("L", 50.0);
//! let q = calculator.calculate("darcy_flow", &inputs).unwrap();
//! assert_eq!(q, 50.0);
//! ```

pub mod built_in;
pub mod calculator;
pub mod formula;
pub mod inputs;
pub mod registry;

pub use petro_types::{
    Direction, ErrorKind, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets,
};

pub use calculator::{CalculatorError, FormulaCalculator};
pub use formula::{PetroleumFormula, resolve_direction};
pub use inputs::{FormulaInputs, InputParseError, parse_assignment};
pub use registry::FormulaRegistry;

// Re-export formula implementations
pub use built_in::{
    darcy_flow::DarcyFlow, decline_curve::DeclineCurve, material_balance::MaterialBalance,
    material_balance_simplified::SimplifiedMaterialBalance,
    productivity_index::ProductivityIndex, pvt_standing::StandingCorrelation,
    vogel_ipr::VogelIpr,
};
