//! Demonstration calculations, one per formula family.

use crate::output::{CalculationReport, Notation};
use petro_prelude::FormulaInputs;

pub struct DemoCase {
    pub formula: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub notation: Notation,
    pub inputs: &'static [(&'static str, f64)],
}

pub const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        formula: "darcy_flow",
        label: "Flow rate",
        unit: "bbl/day",
        notation: Notation::Fixed,
        inputs: &[("k", 0.1), ("A", 100.0), ("deltaP", 500.0), ("mu", 2.0), ("L", 50.0)],
    },
    DemoCase {
        formula: "productivity_index",
        label: "Productivity Index",
        unit: "bbl/day/psi",
        notation: Notation::Fixed,
        inputs: &[("Q", 1000.0), ("Pr", 3000.0), ("Pwf", 2000.0)],
    },
    DemoCase {
        formula: "vogel_ipr",
        label: "Flow rate",
        unit: "bbl/day",
        notation: Notation::Fixed,
        inputs: &[("Qmax", 2000.0), ("Pwf", 1500.0), ("Pr", 3000.0)],
    },
    DemoCase {
        formula: "decline_curve",
        label: "Production after 1 year",
        unit: "bbl/day",
        notation: Notation::Fixed,
        inputs: &[("Qi", 1000.0), ("b", 0.5), ("Di", 0.1), ("t", 365.0)],
    },
    DemoCase {
        formula: "pvt_standing",
        label: "Bubble point pressure",
        unit: "psi",
        notation: Notation::Fixed,
        inputs: &[("Rs", 500.0), ("gamma_g", 0.65), ("T", 180.0), ("API", 35.0)],
    },
    DemoCase {
        formula: "material_balance_simplified",
        label: "Original oil in place",
        unit: "STB",
        notation: Notation::Scientific,
        inputs: &[("Np", 1e6), ("Bo", 1.2), ("Boi", 1.1)],
    },
];

impl DemoCase {
    pub fn inputs(&self) -> FormulaInputs {
        self.inputs.iter().copied().collect()
    }

    /// `Flow rate: 50.00 bbl/day`, or the error line.
    pub fn render(&self, report: &CalculationReport, precision: usize) -> String {
        match report.value {
            Some(value) => format!(
                "{}: {} {}",
                self.label,
                crate::output::format_value(value, precision, self.notation),
                self.unit
            ),
            None => report.to_text(precision, self.notation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petro_prelude::FormulaCalculator;

    #[test]
    fn every_demo_case_succeeds() {
        let calculator = FormulaCalculator::new();
        for case in DEMO_CASES {
            let formula = calculator.formula(case.formula).unwrap();
            let report = CalculationReport::run(formula, &case.inputs());
            assert!(report.succeeded(), "{} failed: {:?}", case.formula, report.error);
        }
    }

    #[test]
    fn demo_lines_match_the_reference_output() {
        let calculator = FormulaCalculator::new();
        let lines: Vec<String> = DEMO_CASES
            .iter()
            .map(|case| {
                let formula = calculator.formula(case.formula).unwrap();
                case.render(&CalculationReport::run(formula, &case.inputs()), 2)
            })
            .collect();
        assert_eq!(lines[0], "Flow rate: 50.00 bbl/day");
        assert_eq!(lines[1], "Productivity Index: 1.00 bbl/day/psi");
        assert_eq!(lines[2], "Flow rate: 1400.00 bbl/day");
        assert_eq!(lines[3], "Production after 1 year: 2.70 bbl/day");
        assert_eq!(lines[4], "Bubble point pressure: 2383.31 psi");
        assert_eq!(lines[5], "Original oil in place: 1.20e7 STB");
    }
}
