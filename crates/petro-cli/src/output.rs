//! Rendering of calculation results, text or JSON.

use crate::config::OutputFormat;
use petro_prelude::{Direction, FormulaError, FormulaInputs, PetroleumFormula, resolve_direction};
use serde::Serialize;

/// How a value is printed in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Fixed,
    Scientific,
}

/// Outcome of one calculation, ready for printing.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub formula: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_for: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FormulaError>,
}

impl CalculationReport {
    /// Runs `formula` on `inputs` and records the outcome.
    pub fn run(formula: &dyn PetroleumFormula, inputs: &FormulaInputs) -> Self {
        let descriptor = formula.descriptor();
        let direction =
            resolve_direction(descriptor.name(), formula.parameters(), formula.targets(), inputs)
                .ok();
        let (value, error) = match formula.calculate(inputs) {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            formula: formula.id(),
            name: descriptor.name(),
            direction,
            solved_for: direction.map(|d| formula.targets().target(d)),
            value,
            error,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.value.is_some()
    }

    /// One line of text, e.g. `Q = 50.00`.
    pub fn to_text(&self, precision: usize, notation: Notation) -> String {
        match (&self.value, &self.error) {
            (Some(value), _) => {
                let target = self.solved_for.unwrap_or("result");
                format!("{target} = {}", format_value(*value, precision, notation))
            }
            (None, Some(err)) => format!("error ({}): {err}", err.kind()),
            (None, None) => "error: no result".to_string(),
        }
    }
}

pub fn format_value(value: f64, precision: usize, notation: Notation) -> String {
    match notation {
        Notation::Fixed => format!("{value:.precision$}"),
        Notation::Scientific => format!("{value:.precision$e}"),
    }
}

/// Serialisable summary of a formula for `list` and `describe`.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub equation: &'static str,
    pub parameters: &'static [&'static str],
    pub forward: &'static str,
    pub inverse: &'static str,
}

impl FormulaSummary {
    pub fn of(formula: &dyn PetroleumFormula) -> Self {
        let descriptor = formula.descriptor();
        let targets = formula.targets();
        Self {
            id: formula.id(),
            name: descriptor.name(),
            equation: descriptor.equation(),
            parameters: formula.parameters(),
            forward: targets.forward,
            inverse: targets.inverse,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "{}: {}\n  id:         {}\n  parameters: {}\n  solves for: {} (forward), {} (inverse)",
            self.name,
            self.equation,
            self.id,
            self.parameters.join(", "),
            self.forward,
            self.inverse
        )
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Resolved printing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub precision: usize,
}
