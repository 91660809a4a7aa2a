//! General material balance equation for oil reservoirs (Havlena-Odeh form).
//!
//! Inputs:
//!   * `Np`, `Gp`, `Wp` cumulative oil, gas and water production
//!   * `Bo`, `Boi` oil FVF (current, initial); `Bg`, `Bgi` gas FVF; `Bw` water FVF
//!   * `Rs`, `Rsi` solution gas-oil ratio (current, initial)
//!   * `m` gas cap to oil zone volume ratio
//!   * `N` original oil in place
//!
//! ```text
//! N = (Np*Bo + (Gp - Np*Rs)*Bg + Wp*Bw) / D
//! D = (Bo - Boi) + (Rsi - Rs)*Bg + m*Boi*(Bg/Bgi - 1)
//! ```
//!
//! Solving for `Np` rearranges the same equation:
//! `Np = (N*D - Gp*Bg - Wp*Bw) / (Bo - Rs*Bg)`.

use crate::formula::{PetroleumFormula, nonzero};
use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};

const PARAMETERS: &[&str] =
    &["Np", "Bo", "Gp", "Rs", "Bg", "Wp", "Bw", "Boi", "Rsi", "m", "Bgi", "N"];

#[derive(Debug, Clone)]
pub struct MaterialBalance {
    descriptor: FormulaDescriptor,
}

impl Default for MaterialBalance {
    fn default() -> Self {
        Self::new()
    }
}

/// Inputs shared by both directions.
struct Fluids {
    bo: f64,
    gp: f64,
    rs: f64,
    bg: f64,
    wp: f64,
    bw: f64,
}

impl MaterialBalance {
    pub fn new() -> Self {
        Self {
            descriptor: FormulaDescriptor::new(
                "Material Balance Equation",
                concat!(
                    "N = (Np * Bo + (Gp - Np * Rs) * Bg + Wp * Bw) / ",
                    "((Bo - Boi) + (Rsi - Rs) * Bg + m * Boi * (Bg/Bgi - 1))",
                ),
            ),
        }
    }

    fn fluids(&self, inputs: &FormulaInputs) -> Result<Fluids, FormulaError> {
        let name = self.descriptor.name();
        Ok(Fluids {
            bo: inputs.require(name, "Bo")?,
            gp: inputs.require(name, "Gp")?,
            rs: inputs.require(name, "Rs")?,
            bg: inputs.require(name, "Bg")?,
            wp: inputs.require(name, "Wp")?,
            bw: inputs.require(name, "Bw")?,
        })
    }

    /// Total expansion per STB of original oil, `D`.
    fn expansion(&self, inputs: &FormulaInputs, fluids: &Fluids) -> Result<f64, FormulaError> {
        let name = self.descriptor.name();
        let boi = inputs.require(name, "Boi")?;
        let rsi = inputs.require(name, "Rsi")?;
        let m = inputs.require(name, "m")?;
        let bgi = nonzero(name, inputs.require(name, "Bgi")?, "Bgi")?;

        let oil = fluids.bo - boi;
        let dissolved_gas = (rsi - fluids.rs) * fluids.bg;
        let gas_cap = m * boi * (fluids.bg / bgi - 1.0);
        Ok(oil + dissolved_gas + gas_cap)
    }
}

impl PetroleumFormula for MaterialBalance {
    fn id(&self) -> &'static str {
        "material_balance"
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
                let np = inputs.require(name, "Np")?;
                let f = self.fluids(inputs)?;
                let denominator = nonzero(name, self.expansion(inputs, &f)?, "denominator")?;
                let withdrawal = np * f.bo + (f.gp - np * f.rs) * f.bg + f.wp * f.bw;
                Ok(withdrawal / denominator)
            }
            Direction::Inverse => {
                let n = inputs.require(name, "N")?;
                let f = self.fluids(inputs)?;
                let expansion = self.expansion(inputs, &f)?;
                let net_oil_fvf = nonzero(name, f.bo - f.rs * f.bg, "Bo - Rs * Bg")?;
                Ok((n * expansion - f.gp * f.bg - f.wp * f.bw) / net_oil_fvf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petro_types::ErrorKind;

    fn reservoir() -> FormulaInputs {
        FormulaInputs::new()
            .with("Bo", 1.25)
            .with("Gp", 1.1e9)
            .with("Rs", 450.0)
            .with("Bg", 0.0012)
            .with("Wp", 5.0e4)
            .with("Bw", 1.02)
            .with("Boi", 1.2)
            .with("Rsi", 600.0)
            .with("m", 0.2)
            .with("Bgi", 0.0009)
    }

    #[test]
    fn zero_initial_gas_fvf_is_division_by_zero() {
        let mut inputs = reservoir().with("Np", 1.0e6);
        inputs.set("Bgi", 0.0);
        let err = MaterialBalance::new().calculate(&inputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    /// No pressure depletion: every expansion term cancels.
    fn undepleted() -> FormulaInputs {
        FormulaInputs::new()
            .with("Bo", 1.2)
            .with("Gp", 0.0)
            .with("Rs", 600.0)
            .with("Bg", 0.0009)
            .with("Wp", 0.0)
            .with("Bw", 1.0)
            .with("Boi", 1.2)
            .with("Rsi", 600.0)
            .with("m", 0.3)
            .with("Bgi", 0.0009)
    }

    #[test]
    fn vanishing_expansion_is_division_by_zero() {
        let inputs = undepleted().with("Np", 1.0e6);
        let err = MaterialBalance::new().calculate(&inputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert!(err.to_string().contains("denominator"));
    }

    #[test]
    fn vanishing_expansion_still_solves_for_production() {
        // Np = (N*D - Gp*Bg - Wp*Bw) / (Bo - Rs*Bg) never divides by D
        let inputs = undepleted().with("N", 5.0e7).with("Gp", 2.0e8).with("Wp", 1.0e4);
        let np = MaterialBalance::new().calculate(&inputs).unwrap();
        let expected = (0.0 - 2.0e8 * 0.0009 - 1.0e4 * 1.0) / (1.2 - 600.0 * 0.0009);
        assert!((np - expected).abs() <= 1e-9 * expected.abs());
    }
}
