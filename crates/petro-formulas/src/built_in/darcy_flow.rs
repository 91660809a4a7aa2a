//! Darcy's law for single-phase flow through porous media.
//!
//! Inputs:
//!   * `k` permeability, `A` cross-sectional area, `deltaP` pressure drop
//!   * `mu` viscosity, `L` flow length
//!   * `Q` flow rate
//!
//! Solves for `Q` (forward) or `k` (inverse). Every input used must be
//! strictly positive.

use crate::formula::PetroleumFormula;
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] = &["k", "A", "deltaP", "mu", "L", "Q"];

#[derive(Debug, Clone)]
pub struct DarcyFlow {
    descriptor: FormulaDescriptor,
}

impl Default for DarcyFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DarcyFlow {
    pub fn new() -> Self {
        Self { descriptor: FormulaDescriptor::new("Darcy's Law", "Q = (k * A * ΔP) / (μ * L)") }
    }
}

impl PetroleumFormula for DarcyFlow {
    fn id(&self) -> &'static str {
        "darcy_flow"
    }

    fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    fn parameters(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn targets(&self) -> SolveTargets {
        SolveTargets { forward: "Q", inverse: "k" }
    }

    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor.name();
        match direction {
            Direction::Forward => {
                let k = inputs.positive(name, "k")?;
                let area = inputs.positive(name, "A")?;
                let delta_p = inputs.positive(name, "deltaP")?;
                let mu = inputs.positive(name, "mu")?;
                let length = inputs.positive(name, "L")?;
                Ok((k * area * delta_p) / (mu * length))
            }
            Direction::Inverse => {
                let q = inputs.positive(name, "Q")?;
                let area = inputs.positive(name, "A")?;
                let delta_p = inputs.positive(name, "deltaP")?;
                let mu = inputs.positive(name, "mu")?;
                let length = inputs.positive(name, "L")?;
                Ok((q * mu * length) / (area * delta_p))
            }
        }
    }
}
