//! Vogel's inflow performance relationship for solution-gas-drive wells.
//!
//! Inputs: `Q` rate at `Pwf`, `Qmax` absolute open flow, `Pwf` flowing
//! bottomhole pressure, `Pr` average reservoir pressure.

use crate::formula::{PetroleumFormula, nonzero};
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] = &["Q", "Qmax", "Pwf", "Pr"];

/// `Q / Qmax = 1 - 0.2 (Pwf/Pr) - 0.8 (Pwf/Pr)^2`, solved for `Q` or `Qmax`.
///
/// Both directions require positive inputs and `Pwf <= Pr`. Solving for
/// `Qmax` at `Pwf == Pr` divides by a vanishing factor and is rejected.
#[derive(Debug, Clone)]
pub struct VogelIpr {
    descriptor: FormulaDescriptor,
}

impl Default for VogelIpr {
    fn default() -> Self {
        Self::new()
    }
}

impl VogelIpr {
    pub fn new() -> Self {
        Self {
            descriptor: FormulaDescriptor::new(
                "Vogel's Equation",
                "Q / Qmax = 1 - 0.2 * (Pwf/Pr) - 0.8 * (Pwf/Pr)^2",
            ),
        }
    }

    /// The dimensionless rate `Q / Qmax` at the given pressures.
    fn rate_fraction(&self, inputs: &FormulaInputs) -> Result<f64, FormulaError> {
        let name = self.descriptor.name();
        let pwf = inputs.positive(name, "Pwf")?;
        let pr = inputs.positive(name, "Pr")?;
        if pwf > pr {
            return Err(FormulaError::invalid_range(
                name,
                "flowing pressure cannot exceed reservoir pressure",
            ));
        }
        let ratio = pwf / pr;
        Ok(1.0 - 0.2 * ratio - 0.8 * ratio.powi(2))
    }
}

impl PetroleumFormula for VogelIpr {
    fn id(&self) -> &'static str {
        "vogel_ipr"
    }

    fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    fn parameters(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn targets(&self) -> SolveTargets {
        SolveTargets { forward: "Q", inverse: "Qmax" }
    }

    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor.name();
        match direction {
            Direction::Forward => {
                let qmax = inputs.positive(name, "Qmax")?;
                Ok(qmax * self.rate_fraction(inputs)?)
            }
            Direction::Inverse => {
                let q = inputs.positive(name, "Q")?;
                let fraction = self.rate_fraction(inputs)?;
                Ok(q / nonzero(name, fraction, "Q/Qmax")?)
            }
        }
    }
}
