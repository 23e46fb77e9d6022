//! Command-line option parsing.
//!
//! Most configuration is done via config files (see [`config`](../config/index.html) for details).

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;

use crate::config;
use ledger_effects::{derive_batch, logging, Config, OperationContext, OperationReport};

// Note: The docstring on `Cli` is the help shown when calling the binary with `--help`.
/// Derives the effects of applied ledger operations.
#[derive(Debug, Parser)]
#[command(name = "ledger-effects", version, about, long_about = None)]
pub enum Cli {
    /// Derive the effects of every operation in a file.
    ///
    /// The input is a JSON array of operation contexts. One JSON report per operation is written
    /// to stdout.
    Derive {
        /// Path to the JSON input file.
        input: PathBuf,

        /// Path to configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the reports, overriding the configuration file.
        #[arg(long)]
        pretty: bool,
    },
    /// Generate a configuration file from defaults and dump it to stdout.
    GenerateConfig,
}

impl Cli {
    /// Executes selected CLI command.
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Derive {
                input,
                config,
                pretty,
            } => {
                let mut config: Config = match config {
                    Some(path) => config::load_from_file(path)?,
                    None => Config::default(),
                };
                config.output.pretty |= pretty;
                logging::init_with_config(&config.logging)?;

                let contents = fs::read(&input)
                    .with_context(|| format!("failed to read input file {}", input.display()))?;
                let contexts: Vec<OperationContext> = serde_json::from_slice(&contents)
                    .with_context(|| format!("failed to parse input file {}", input.display()))?;
                info!(operations = contexts.len(), "deriving effects");

                let reports = derive_batch(&contexts, &config.processing);
                write_reports(&reports, config.output.pretty)?;

                let failures = reports.iter().filter(|report| report.is_failure()).count();
                info!(reports = reports.len(), failures, "finished deriving effects");
                if failures > 0 && config.processing.fail_fast {
                    bail!("stopped at the first operation whose effects could not be derived");
                }
                Ok(())
            }
            Cli::GenerateConfig => {
                let output = config::to_string(&Config::default())?;
                println!("{}", output);
                Ok(())
            }
        }
    }
}

fn write_reports(reports: &[OperationReport], pretty: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for report in reports {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, report)?;
        } else {
            serde_json::to_writer(&mut writer, report)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_should_be_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_parse_derive_arguments() {
        let cli = Cli::parse_from(["ledger-effects", "derive", "ops.json", "--pretty"]);
        match cli {
            Cli::Derive {
                input,
                config,
                pretty,
            } => {
                assert_eq!(input, PathBuf::from("ops.json"));
                assert_eq!(config, None);
                assert!(pretty);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
