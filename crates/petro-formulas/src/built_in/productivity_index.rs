//! Productivity index of a well: rate per unit drawdown.
//!
//! Inputs: `Q` rate, `Pr` average reservoir pressure, `Pwf` flowing
//! bottomhole pressure, `J` productivity index.

use crate::formula::PetroleumFormula;
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] = &["Q", "Pr", "Pwf", "J"];

/// `J = Q / (Pr - Pwf)`, solved for `J` or for `Q`.
///
/// Reservoir pressure must be strictly greater than the flowing pressure in
/// both directions.
#[derive(Debug, Clone)]
pub struct ProductivityIndex {
    descriptor: FormulaDescriptor,
}

impl Default for ProductivityIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductivityIndex {
    pub fn new() -> Self {
        Self { descriptor: FormulaDescriptor::new("Productivity Index", "J = Q / (Pr - Pwf)") }
    }

    fn drawdown(&self, inputs: &FormulaInputs) -> Result<f64, FormulaError> {
        let name = self.descriptor.name();
        let pr = inputs.require(name, "Pr")?;
        let pwf = inputs.require(name, "Pwf")?;
        if pr <= pwf {
            return Err(FormulaError::invalid_range(
                name,
                "reservoir pressure must exceed flowing pressure",
            ));
        }
        Ok(pr - pwf)
    }
}

impl PetroleumFormula for ProductivityIndex {
    fn id(&self) -> &'static str {
        "productivity_index"
    }

    fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    fn parameters(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn targets(&self) -> SolveTargets {
        SolveTargets { forward: "J", inverse: "Q" }
    }

    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor.name();
        match direction {
            Direction::Forward => {
                let q = inputs.require(name, "Q")?;
                Ok(q / self.drawdown(inputs)?)
            }
            Direction::Inverse => {
                let j = inputs.require(name, "J")?;
                Ok(j * self.drawdown(inputs)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petro_types::ErrorKind;

    #[test]
    fn equal_pressures_are_rejected_before_dividing() {
        let pi = ProductivityIndex::new();
        let inputs = FormulaInputs::new().with("Q", 1000.0).with("Pr", 2000.0).with("Pwf", 2000.0);
        let err = pi.calculate(&inputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert!(err.to_string().contains("reservoir pressure must exceed flowing pressure"));
    }

    #[test]
    fn explicit_target_reports_missing_known() {
        let pi = ProductivityIndex::new();
        let inputs = FormulaInputs::new().with("Q", 1000.0).with("Pr", 3000.0).solve_for("J");
        let err = pi.calculate(&inputs).unwrap_err();
        assert_eq!(err, FormulaError::missing("Productivity Index", "Pwf"));
    }
}
