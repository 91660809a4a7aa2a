use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive metadata attached to every formula.
///
/// Set once when the formula is constructed and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaDescriptor {
    name: &'static str,
    equation: &'static str,
}

impl FormulaDescriptor {
    /// Creates a descriptor from a display name and the equation text.
    #[must_use]
    pub const fn new(name: &'static str, equation: &'static str) -> Self {
        Self { name, equation }
    }

    /// Human readable formula name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The equation in plain text.
    #[must_use]
    pub const fn equation(&self) -> &'static str {
        self.equation
    }
}

impl fmt::Display for FormulaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.equation)
    }
}

/// Which of the two supported unknowns a calculation solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The quantity the equation is written for (left-hand side).
    Forward,
    /// The single alternate unknown the equation can be rearranged for.
    Inverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Inverse => write!(f, "inverse"),
        }
    }
}

/// Parameter names solved for by each direction of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolveTargets {
    /// Parameter produced by [`Direction::Forward`].
    pub forward: &'static str,
    /// Parameter produced by [`Direction::Inverse`].
    pub inverse: &'static str,
}

impl SolveTargets {
    /// Parameter name solved for in the given direction.
    #[must_use]
    pub const fn target(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Forward => self.forward,
            Direction::Inverse => self.inverse,
        }
    }

    /// Maps a parameter name back to the direction that solves for it.
    #[must_use]
    pub fn direction_for(&self, parameter: &str) -> Option<Direction> {
        if parameter == self.forward {
            Some(Direction::Forward)
        } else if parameter == self.inverse {
            Some(Direction::Inverse)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_display_joins_name_and_equation() {
        let descriptor = FormulaDescriptor::new("Darcy's Law", "Q = (k * A * ΔP) / (μ * L)");
        assert_eq!(descriptor.to_string(), "Darcy's Law: Q = (k * A * ΔP) / (μ * L)");
    }

    #[test]
    fn targets_map_both_ways() {
        let targets = SolveTargets { forward: "Q", inverse: "k" };
        assert_eq!(targets.target(Direction::Inverse), "k");
        assert_eq!(targets.direction_for("Q"), Some(Direction::Forward));
        assert_eq!(targets.direction_for("k"), Some(Direction::Inverse));
        assert_eq!(targets.direction_for("mu"), None);
    }
}
