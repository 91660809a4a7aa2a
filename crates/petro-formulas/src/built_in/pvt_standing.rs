//! Standing's bubble-point pressure correlation.
//!
//! Inputs:
//!   * `Rs` solution gas-oil ratio (scf/STB)
//!   * `gamma_g` gas specific gravity (air = 1)
//!   * `T` temperature (°F), `API` stock-tank oil gravity
//!   * `Pb` bubble-point pressure (psia)
//!
//! Solves for `Pb` (forward) or `Rs` (inverse, by inverting the power-law
//! term). All inputs must be strictly positive, and so must a computed `Pb`.

use crate::formula::PetroleumFormula;
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] = &["Rs", "gamma_g", "T", "API", "Pb"];

const COEFFICIENT: f64 = 18.2;
const GOR_EXPONENT: f64 = 0.83;
const OFFSET: f64 = 1.4;
const TEMPERATURE_FACTOR: f64 = 0.00091;
const API_FACTOR: f64 = 0.0125;

#[derive(Debug, Clone)]
pub struct StandingCorrelation {
    descriptor: FormulaDescriptor,
}

impl Default for StandingCorrelation {
    fn default() -> Self {
        Self::new()
    }
}

impl StandingCorrelation {
    pub fn new() -> Self {
        Self {
            descriptor: FormulaDescriptor::new(
                "Standing's Correlation",
                "Pb = 18.2 * ((Rs/γg)^0.83 * 10^(0.00091*T - 0.0125*°API) - 1.4)",
            ),
        }
    }

    /// `10^(0.00091 T - 0.0125 API)`
    fn gravity_temperature_term(&self, inputs: &FormulaInputs) -> Result<f64, FormulaError> {
        let name = self.descriptor.name();
        let t = inputs.positive(name, "T")?;
        let api = inputs.positive(name, "API")?;
        Ok(10f64.powf(TEMPERATURE_FACTOR * t - API_FACTOR * api))
    }
}

impl PetroleumFormula for StandingCorrelation {
    fn id(&self) -> &'static str {
        "pvt_standing"
    }

    fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    fn parameters(&self) -> &'static [&'static str] {
        PARAMETERS
    }

    fn targets(&self) -> SolveTargets {
        SolveTargets { forward: "Pb", inverse: "Rs" }
    }

    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor.name();
        match direction {
            Direction::Forward => {
                let rs = inputs.positive(name, "Rs")?;
                let gamma_g = inputs.positive(name, "gamma_g")?;
                let term = self.gravity_temperature_term(inputs)?;
                let pb = COEFFICIENT * ((rs / gamma_g).powf(GOR_EXPONENT) * term - OFFSET);
                if pb <= 0.0 {
                    return Err(FormulaError::invalid_range(
                        name,
                        "computed bubble-point pressure must be positive",
                    ));
                }
                Ok(pb)
            }
            Direction::Inverse => {
                let pb = inputs.positive(name, "Pb")?;
                let term = self.gravity_temperature_term(inputs)?;
                let gamma_g = inputs.positive(name, "gamma_g")?;
                let inner = (pb / COEFFICIENT + OFFSET) / term;
                Ok(gamma_g * inner.powf(1.0 / GOR_EXPONENT))
            }
        }
    }
}
