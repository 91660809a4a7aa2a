//! Named, optional numeric inputs for a single formula evaluation.

use petro_types::FormulaError;
use std::collections::BTreeMap;
use thiserror::Error;

/// A calculation request: parameter name to value, plus an optional explicit
/// unknown to solve for.
///
/// Parameters that are not present are the unknowns. When no explicit target
/// is set, the formula infers its solve direction from which parameter is
/// absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormulaInputs {
    values: BTreeMap<String, f64>,
    target: Option<String>,
}

impl FormulaInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a known parameter value.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Adds a parameter that may be unknown; `None` leaves it unset.
    pub fn with_opt(mut self, name: impl Into<String>, value: Option<f64>) -> Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    /// Names the unknown explicitly instead of inferring it.
    pub fn solve_for(mut self, name: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The explicit solve target, if one was named.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Names of the supplied parameters, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a JSON object of numbers; `null` members are left unset.
    pub fn from_json(json: &str) -> Result<Self, InputParseError> {
        let raw: BTreeMap<String, Option<f64>> = serde_json::from_str(json)
            .map_err(|e| InputParseError::Json(e.to_string()))?;
        Ok(raw.into_iter().fold(Self::new(), |inputs, (name, value)| inputs.with_opt(name, value)))
    }

    /// Gets a required finite number, attributing failures to `formula`.
    pub fn require(&self, formula: &str, name: &str) -> Result<f64, FormulaError> {
        let value = self.get(name).ok_or_else(|| FormulaError::missing(formula, name))?;
        if !value.is_finite() {
            return Err(FormulaError::invalid_range(
                formula,
                format!("parameter '{name}' must be a finite number, got {value}"),
            ));
        }
        Ok(value)
    }

    /// Gets a required number that must be strictly positive.
    pub fn positive(&self, formula: &str, name: &str) -> Result<f64, FormulaError> {
        let value = self.require(formula, name)?;
        if value <= 0.0 {
            return Err(FormulaError::invalid_range(
                formula,
                format!("all parameters must be positive values ('{name}' = {value})"),
            ));
        }
        Ok(value)
    }

    /// Gets a required number that must not be negative.
    pub fn non_negative(&self, formula: &str, name: &str) -> Result<f64, FormulaError> {
        let value = self.require(formula, name)?;
        if value < 0.0 {
            return Err(FormulaError::invalid_range(
                formula,
                format!("all parameters must be non-negative ('{name}' = {value})"),
            ));
        }
        Ok(value)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FormulaInputs {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for (name, value) in iter {
            inputs.set(name, value);
        }
        inputs
    }
}

/// Failure to turn user text into formula inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    #[error("expected NAME=VALUE, got '{0}'")]
    Malformed(String),

    #[error("value for '{name}' is not a number: '{value}'")]
    InvalidNumber { name: String, value: String },

    #[error("invalid JSON inputs: {0}")]
    Json(String),
}

/// Parses a `NAME=VALUE` assignment such as `deltaP=500`.
pub fn parse_assignment(raw: &str) -> Result<(String, f64), InputParseError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| InputParseError::Malformed(raw.to_string()))?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() {
        return Err(InputParseError::Malformed(raw.to_string()));
    }
    let number = value.parse::<f64>().map_err(|_| InputParseError::InvalidNumber {
        name: name.to_string(),
        value: value.to_string(),
    })?;
    Ok((name.to_string(), number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petro_types::ErrorKind;

    #[test]
    fn with_opt_none_leaves_parameter_unset() {
        let inputs = FormulaInputs::new().with("Q", 1000.0).with_opt("J", None);
        assert!(inputs.contains("Q"));
        assert!(!inputs.contains("J"));
        assert_eq!(inputs.len(), 1);
    }

    #[test]
    fn require_reports_missing_and_non_finite() {
        let inputs = FormulaInputs::new().with("mu", f64::NAN);
        let missing = inputs.require("Darcy's Law", "L").unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingParameter);
        let nan = inputs.require("Darcy's Law", "mu").unwrap_err();
        assert_eq!(nan.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn positive_and_non_negative_bounds() {
        let inputs = FormulaInputs::new().with("zero", 0.0).with("neg", -1.0);
        assert!(inputs.positive("f", "zero").is_err());
        assert_eq!(inputs.non_negative("f", "zero").unwrap(), 0.0);
        assert_eq!(inputs.non_negative("f", "neg").unwrap_err().kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn parses_assignments() {
        assert_eq!(parse_assignment("deltaP=500").unwrap(), ("deltaP".to_string(), 500.0));
        assert_eq!(parse_assignment(" Np = 1e6 ").unwrap(), ("Np".to_string(), 1e6));
        assert!(matches!(parse_assignment("k"), Err(InputParseError::Malformed(_))));
        assert!(matches!(parse_assignment("=3"), Err(InputParseError::Malformed(_))));
        assert!(matches!(parse_assignment("k=abc"), Err(InputParseError::InvalidNumber { .. })));
    }

    #[test]
    fn json_nulls_are_unknowns() {
        let inputs = FormulaInputs::from_json(r#"{"Q": 1000, "Pr": 3000, "Pwf": 2000, "J": null}"#)
            .unwrap();
        assert_eq!(inputs.get("Q"), Some(1000.0));
        assert!(!inputs.contains("J"));
        assert!(FormulaInputs::from_json("[1, 2]").is_err());
    }
}
