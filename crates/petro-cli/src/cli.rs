//! Command-line interface for the petroleum formula calculators.

use crate::config::OutputFormat;
use crate::demo::DEMO_CASES;
use crate::output::{CalculationReport, FormulaSummary, Notation, OutputSettings, to_json};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use petro_prelude::{FormulaCalculator, FormulaInputs, parse_assignment};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Petroleum engineering formula calculator
#[derive(Parser, Debug)]
#[command(name = "petrocalc")]
#[command(about = "Reservoir and production engineering formula calculator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for printed values
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available formulas
    List,

    /// Show a formula's equation, parameters and solve targets
    Describe {
        /// Formula id, e.g. `darcy_flow`
        formula: String,
    },

    /// Run a single calculation
    Calc {
        /// Formula id, e.g. `vogel_ipr`
        formula: String,

        /// Unknown to solve for; inferred from the omitted parameter otherwise
        #[arg(long)]
        solve_for: Option<String>,

        /// Inputs as a JSON object; `null` members are unknowns
        #[arg(long, conflicts_with = "inputs")]
        json: Option<String>,

        /// Known inputs as NAME=VALUE
        #[arg(value_parser = parse_assignment)]
        inputs: Vec<(String, f64)>,
    },

    /// Run the demonstration calculations
    Demo,
}

/// Whether every calculation the command ran succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    CalculationFailed,
}

impl Cli {
    pub fn execute(&self, settings: OutputSettings, out: &mut dyn Write) -> Result<Outcome> {
        let calculator = FormulaCalculator::new();
        debug!(command = ?self.command, ?settings, "executing command");

        match &self.command {
            Command::List => list(&calculator, settings, out),
            Command::Describe { formula } => describe(&calculator, formula, settings, out),
            Command::Calc { formula, solve_for, json, inputs } => {
                let mut request = match json {
                    Some(json) => FormulaInputs::from_json(json)?,
                    None => inputs.iter().cloned().collect(),
                };
                if let Some(target) = solve_for {
                    request = request.solve_for(target.clone());
                }
                calc(&calculator, formula, &request, settings, out)
            }
            Command::Demo => demo(&calculator, settings, out),
        }
    }
}

fn list(
    calculator: &FormulaCalculator,
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let summaries: Vec<FormulaSummary> =
        calculator.registry().iter().map(FormulaSummary::of).collect();
    match settings.format {
        OutputFormat::Json => writeln!(out, "{}", to_json(&summaries)?)?,
        OutputFormat::Text => {
            for summary in &summaries {
                writeln!(out, "{:<28} {}: {}", summary.id, summary.name, summary.equation)?;
            }
        }
    }
    Ok(Outcome::Success)
}

fn describe(
    calculator: &FormulaCalculator,
    formula_id: &str,
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let summary = FormulaSummary::of(calculator.formula(formula_id)?);
    match settings.format {
        OutputFormat::Json => writeln!(out, "{}", to_json(&summary)?)?,
        OutputFormat::Text => writeln!(out, "{}", summary.to_text())?,
    }
    Ok(Outcome::Success)
}

fn calc(
    calculator: &FormulaCalculator,
    formula_id: &str,
    inputs: &FormulaInputs,
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let formula = calculator.formula(formula_id)?;
    let report = CalculationReport::run(formula, inputs);
    info!(formula = formula_id, succeeded = report.succeeded(), "calculation finished");

    match settings.format {
        OutputFormat::Json => writeln!(out, "{}", to_json(&report)?)?,
        OutputFormat::Text => {
            writeln!(out, "{}", report.to_text(settings.precision, Notation::Fixed))?
        }
    }
    Ok(if report.succeeded() { Outcome::Success } else { Outcome::CalculationFailed })
}

fn demo(
    calculator: &FormulaCalculator,
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let mut reports = Vec::with_capacity(DEMO_CASES.len());
    if settings.format == OutputFormat::Text {
        writeln!(out, "Petroleum Engineering Formulas Calculator\n")?;
    }

    for case in DEMO_CASES {
        let formula = calculator
            .formula(case.formula)
            .with_context(|| format!("demo references unregistered formula '{}'", case.formula))?;
        let report = CalculationReport::run(formula, &case.inputs());
        if settings.format == OutputFormat::Text {
            writeln!(out, "{formula}")?;
            writeln!(out, "{}\n", case.render(&report, settings.precision))?;
        }
        reports.push(report);
    }

    if settings.format == OutputFormat::Json {
        writeln!(out, "{}", to_json(&reports)?)?;
    }
    let all_ok = reports.iter().all(CalculationReport::succeeded);
    Ok(if all_ok { Outcome::Success } else { Outcome::CalculationFailed })
}
