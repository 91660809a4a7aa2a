use crate::formula::PetroleumFormula;
use crate::inputs::FormulaInputs;
use crate::registry::FormulaRegistry;
use petro_types::FormulaError;
use thiserror::Error;
use tracing::debug;

/// Failure of a calculation routed by formula id.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("formula '{0}' not found")]
    UnknownFormula(String),

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// Runs any registered formula by id.
pub struct FormulaCalculator {
    registry: FormulaRegistry,
}

impl Default for FormulaCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormulaCalculator {
    pub fn new() -> Self {
        Self { registry: FormulaRegistry::with_built_ins() }
    }

    pub fn with_registry(registry: FormulaRegistry) -> Self {
        Self { registry }
    }

    pub fn calculate(
        &self,
        formula_id: &str,
        inputs: &FormulaInputs,
    ) -> Result<f64, CalculatorError> {
        let formula = self.formula(formula_id)?;
        debug!(formula = formula_id, supplied = inputs.len(), "dispatching calculation");
        Ok(formula.calculate(inputs)?)
    }

    pub fn formula(&self, formula_id: &str) -> Result<&dyn PetroleumFormula, CalculatorError> {
        self.registry
            .get(formula_id)
            .ok_or_else(|| CalculatorError::UnknownFormula(formula_id.to_string()))
    }

    /// `"{name}: {equation}"` for the formula.
    pub fn describe(&self, formula_id: &str) -> Result<String, CalculatorError> {
        Ok(self.formula(formula_id)?.to_string())
    }

    pub fn registry(&self) -> &FormulaRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_formula_is_reported() {
        let calculator = FormulaCalculator::new();
        let err = calculator.calculate("gas_z_factor", &FormulaInputs::new()).unwrap_err();
        assert_eq!(err, CalculatorError::UnknownFormula("gas_z_factor".to_string()));
        assert_eq!(err.to_string(), "formula 'gas_z_factor' not found");
    }

    #[test]
    fn describe_uses_descriptor_display() {
        let calculator = FormulaCalculator::new();
        assert_eq!(
            calculator.describe("productivity_index").unwrap(),
            "Productivity Index: J = Q / (Pr - Pwf)"
        );
    }
}
