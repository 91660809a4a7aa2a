//! Arps decline curve analysis.
//!
//! Inputs:
//!   * `Qi` initial rate, `Q` rate at time `t`
//!   * `b` Arps exponent (`0` selects exponential decline)
//!   * `Di` initial nominal decline rate, `t` elapsed time
//!
//! All inputs must be non-negative.

use crate::formula::PetroleumFormula;
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] = &["Qi", "b", "Di", "t", "Q"];

#[derive(Debug, Clone)]
pub struct DeclineCurve {
    descriptor: FormulaDescriptor,
}

impl Default for DeclineCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclineCurve {
    pub fn new() -> Self {
        Self {
            descriptor: FormulaDescriptor::new(
                "Arps Decline Curve",
                "Q = Qi / (1 + b * Di * t)^(1/b), Q = Qi * e^(-Di * t) for b = 0",
            ),
        }
    }

    /// `Qi / Q` after time `t`.
    fn decline_factor(&self, inputs: &FormulaInputs) -> Result<f64, FormulaError> {
        let name = self.descriptor.name();
        let b = inputs.non_negative(name, "b")?;
        let di = inputs.non_negative(name, "Di")?;
        let t = inputs.non_negative(name, "t")?;
        // exact test: b == 0 is the exponential limit, anything else is hyperbolic
        if b == 0.0 {
            Ok((di * t).exp())
        } else {
            // (1 + b*Di*t)^(1/b), kept accurate for tiny b
            Ok(((b * di * t).ln_1p() / b).exp())
        }
    }
}

impl PetroleumFormula for DeclineCurve {
    fn id(&self) -> &'static str {
        "decline_curve"
    }

    fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    fn parameters(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn targets(&self) -> SolveTargets {
        SolveTargets { forward: "Q", inverse: "Qi" }
    }

    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor.name();
        match direction {
            Direction::Forward => {
                let qi = inputs.non_negative(name, "Qi")?;
                Ok(qi / self.decline_factor(inputs)?)
            }
            Direction::Inverse => {
                let q = inputs.non_negative(name, "Q")?;
                Ok(q * self.decline_factor(inputs)?)
            }
        }
    }
}
