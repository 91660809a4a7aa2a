use clap::Parser;
use petro_cli::logging::init_logging;
use petro_cli::{Cli, ConfigSource, Outcome, OutputSettings, PetrocalcConfig};
use std::process::ExitCode;
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (config, source) = PetrocalcConfig::load(cli.config.as_deref())?;
    let config = config.apply_env_overrides();
    init_logging(&config.logging, cli.verbose)?;

    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "loaded configuration"),
        ConfigSource::Defaults(path) => info!(
            path = %path.display(),
            "configuration file not found, using default configuration"
        ),
    }

    let settings = OutputSettings {
        format: cli.format.unwrap_or(config.output.format),
        precision: cli.precision.unwrap_or(config.output.precision),
    };

    let mut stdout = std::io::stdout().lock();
    match cli.execute(settings, &mut stdout)? {
        Outcome::Success => Ok(ExitCode::SUCCESS),
        Outcome::CalculationFailed => Ok(ExitCode::FAILURE),
    }
}
