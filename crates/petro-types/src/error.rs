//! Error taxonomy for formula evaluation.
//!
//! Every validation failure inside a formula is converted into a
//! [`FormulaError`] at the point of detection and returned to the caller.
//! The set of kinds is closed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result of a single formula evaluation.
pub type FormulaResult = Result<f64, FormulaError>;

/// Closed classification of calculation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required input for the selected solve direction is absent.
    MissingParameter,
    /// An input violates a domain constraint.
    InvalidRange,
    /// A computed denominator evaluates to zero.
    DivisionByZero,
    /// The supplied/omitted pattern matches no supported solve direction.
    InsufficientParameters,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::MissingParameter => "missing parameter",
            ErrorKind::InvalidRange => "invalid range",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::InsufficientParameters => "insufficient parameters",
        };
        f.write_str(label)
    }
}

/// Error returned by a formula calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FormulaError {
    /// A required input was not supplied.
    #[error("{formula}: required parameter '{parameter}' was not provided")]
    MissingParameter {
        /// Formula that rejected the inputs.
        formula: String,
        /// Name of the absent parameter.
        parameter: String,
    },

    /// An input lies outside the domain of the equation.
    #[error("{formula}: {message}")]
    InvalidRange {
        /// Formula that rejected the inputs.
        formula: String,
        /// Which constraint was violated.
        message: String,
    },

    /// A denominator evaluated to exactly zero.
    #[error("{formula}: division by zero ({message})")]
    DivisionByZero {
        /// Formula that rejected the inputs.
        formula: String,
        /// The vanishing term.
        message: String,
    },

    /// The inputs do not select a supported solve direction.
    #[error("{formula}: insufficient parameters provided ({message})")]
    InsufficientParameters {
        /// Formula that rejected the inputs.
        formula: String,
        /// Why no direction could be selected.
        message: String,
    },
}

impl FormulaError {
    /// Creates a missing parameter error.
    #[must_use]
    pub fn missing(formula: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter { formula: formula.into(), parameter: parameter.into() }
    }

    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(formula: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRange { formula: formula.into(), message: message.into() }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(formula: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DivisionByZero { formula: formula.into(), message: message.into() }
    }

    /// Creates an insufficient parameters error.
    #[must_use]
    pub fn insufficient(formula: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InsufficientParameters { formula: formula.into(), message: message.into() }
    }

    /// The kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter { .. } => ErrorKind::MissingParameter,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InsufficientParameters { .. } => ErrorKind::InsufficientParameters,
        }
    }

    /// Name of the formula that produced the error.
    #[must_use]
    pub fn formula(&self) -> &str {
        match self {
            Self::MissingParameter { formula, .. }
            | Self::InvalidRange { formula, .. }
            | Self::DivisionByZero { formula, .. }
            | Self::InsufficientParameters { formula, .. } => formula,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FormulaError::invalid_range(
            "Productivity Index",
            "reservoir pressure must exceed flowing pressure",
        );
        assert_eq!(
            err.to_string(),
            "Productivity Index: reservoir pressure must exceed flowing pressure"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.formula(), "Productivity Index");
    }

    #[test]
    fn error_serializes_with_kind_tag() {
        let err = FormulaError::missing("Darcy's Law", "mu");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "MissingParameter");
        assert_eq!(json["parameter"], "mu");

        let back: FormulaError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
