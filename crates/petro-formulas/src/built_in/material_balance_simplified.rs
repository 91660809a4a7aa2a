//! Simplified material balance for an undersaturated oil reservoir.
//!
//! Inputs: `Np` cumulative oil produced, `Bo` current oil FVF, `Boi` initial
//! oil FVF, `N` original oil in place.

use crate::formula::PetroleumFormula;
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] = &["Np", "Bo", "Boi", "N"];

/// `N = Np * Bo / (Bo - Boi)`, solved for `N` or `Np`.
///
/// Requires positive inputs and `Bo > Boi` in both directions.
#[derive(Debug, Clone)]
pub struct SimplifiedMaterialBalance {
    descriptor: FormulaDescriptor,
}

impl Default for SimplifiedMaterialBalance {
    fn default() -> Self {
        Self::new()
    }
}

impl SimplifiedMaterialBalance {
    pub fn new() -> Self {
        Self {
            descriptor: FormulaDescriptor::new(
                "Simplified Material Balance",
                "N = Np * Bo / (Bo - Boi)",
            ),
        }
    }

    /// Returns `(Bo, Bo - Boi)`.
    fn expansion(&self, inputs: &FormulaInputs) -> Result<(f64, f64), FormulaError> {
        let name = self.descriptor.name();
        let bo = inputs.positive(name, "Bo")?;
        let boi = inputs.positive(name, "Boi")?;
        if bo <= boi {
            return Err(FormulaError::invalid_range(
                name,
                "current FVF must be greater than initial FVF (Bo > Boi)",
            ));
        }
        Ok((bo, bo - boi))
    }
}

impl PetroleumFormula for SimplifiedMaterialBalance {
    fn id(&self) -> &'static str {
        "material_balance_simplified"
    }

    fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    fn parameters(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn targets(&self) -> SolveTargets {
        SolveTargets { forward: "N", inverse: "Np" }
    }

    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor.name();
        match direction {
            Direction::Forward => {
                let np = inputs.positive(name, "Np")?;
                let (bo, expansion) = self.expansion(inputs)?;
                Ok(np * bo / expansion)
            }
            Direction::Inverse => {
                let n = inputs.positive(name, "N")?;
                let (bo, expansion) = self.expansion(inputs)?;
                Ok(n * expansion / bo)
            }
        }
    }
}
