//! The contract every formula implements.

use crate::inputs::FormulaInputs;
use petro_types::{Direction, FormulaDescriptor, FormulaError, FormulaResult, SolveTargets};
use std::fmt;
use tracing::{debug, warn};

/// A petroleum engineering formula.
///
/// Formulas are immutable after construction, stateless and thread-safe.
/// Implementors provide `solve`; callers normally go through `calculate`,
/// which picks the direction from the inputs first.
pub trait PetroleumFormula: Send + Sync {
    /// Registry key, e.g. `darcy_flow`.
    fn id(&self) -> &'static str;

    fn descriptor(&self) -> &FormulaDescriptor;

    /// The fixed parameter set, both solve targets included.
    fn parameters(&self) -> &'static [&'static str];

    fn targets(&self) -> SolveTargets;

    /// Computes the target of `direction` from the known inputs.
    fn solve(&self, direction: Direction, inputs: &FormulaInputs) -> FormulaResult;

    /// Resolves the solve direction, then solves.
    fn calculate(&self, inputs: &FormulaInputs) -> FormulaResult {
        let name = self.descriptor().name();
        let direction =
            resolve_direction(name, self.parameters(), self.targets(), inputs).inspect_err(|err| {
                warn!(formula = self.id(), error = %err, "no solve direction matches the inputs");
            })?;
        let target = self.targets().target(direction);

        let outcome = self
            .solve(direction, inputs)
            .and_then(|value| ensure_finite(name, target, value));

        match &outcome {
            Ok(value) => debug!(
                formula = self.id(),
                %direction,
                solved_for = target,
                value,
                "calculation resolved"
            ),
            Err(err) => warn!(
                formula = self.id(),
                %direction,
                kind = %err.kind(),
                error = %err,
                "calculation failed"
            ),
        }
        outcome
    }
}

impl fmt::Display for dyn PetroleumFormula + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.descriptor(), f)
    }
}

/// Selects the solve direction for `inputs`.
///
/// An explicit target must name one of the two solve targets. Without one,
/// exactly one parameter may be absent and it must be a solve target.
/// Unrecognised parameter names are rejected.
pub fn resolve_direction(
    formula: &str,
    parameters: &[&str],
    targets: SolveTargets,
    inputs: &FormulaInputs,
) -> Result<Direction, FormulaError> {
    if let Some(unknown) = inputs.names().find(|name| !parameters.contains(name)) {
        return Err(FormulaError::insufficient(
            formula,
            format!("unrecognised parameter '{unknown}'"),
        ));
    }

    let unsupported = |name: &str| {
        if parameters.contains(&name) {
            FormulaError::insufficient(
                formula,
                format!(
                    "cannot solve for '{name}'; supported unknowns are '{}' and '{}'",
                    targets.forward, targets.inverse
                ),
            )
        } else {
            FormulaError::insufficient(formula, format!("unrecognised parameter '{name}'"))
        }
    };

    if let Some(target) = inputs.target() {
        return targets.direction_for(target).ok_or_else(|| unsupported(target));
    }

    let absent: Vec<&str> = parameters.iter().copied().filter(|p| !inputs.contains(p)).collect();
    match absent.as_slice() {
        [single] => targets.direction_for(single).ok_or_else(|| unsupported(*single)),
        [] => Err(FormulaError::insufficient(
            formula,
            "every parameter was supplied; leave the unknown unset",
        )),
        many => Err(FormulaError::insufficient(
            formula,
            format!(
                "{} parameters are unset ({}); only one unknown is allowed",
                many.len(),
                many.join(", ")
            ),
        )),
    }
}

/// Rejects a zero denominator.
pub(crate) fn nonzero(formula: &str, value: f64, term: &str) -> Result<f64, FormulaError> {
    if value == 0.0 {
        return Err(FormulaError::division_by_zero(formula, format!("{term} evaluates to zero")));
    }
    Ok(value)
}

fn ensure_finite(formula: &str, target: &str, value: f64) -> FormulaResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::invalid_range(
            formula,
            format!("computed '{target}' is not a finite number ({value})"),
        ))
    }
}
