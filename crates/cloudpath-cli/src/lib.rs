// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! `cloudpath` operator CLI: validate record files and run the browsing
//! operations without a server.

mod commands;
mod helpers;
mod record_commands;

use clap::{error::ErrorKind, Parser};
use cloudpath_core::{ExitCode, MachineError};
use commands::{CatalogCommand, Commands, OpenapiCommand};
use serde_json::json;
use std::process::ExitCode as ProcessExitCode;

pub const CRATE_NAME: &str = "cloudpath-cli";

const CLOUDPATH_HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "cloudpath", version)]
#[command(about = "CloudPath certification catalog CLI")]
#[command(help_template = CLOUDPATH_HELP_TEMPLATE)]
#[command(after_help = "Environment:\n  CLOUDPATH_DATA_PATH   Record file used when --data is omitted")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy)]
pub(crate) struct OutputMode {
    pub(crate) json: bool,
}

#[derive(Debug)]
pub(crate) struct CliError {
    pub(crate) exit_code: ExitCode,
    pub(crate) machine: MachineError,
}

impl CliError {
    pub(crate) fn internal(message: String) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", &message),
        }
    }
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError {
                    exit_code: ExitCode::Usage,
                    machine: MachineError::new("usage_error", "invalid command line arguments")
                        .with_detail("error", &err.to_string()),
                });
            }
        },
    };
    let output_mode = OutputMode { json: cli.json };
    let command = cli.command.ok_or_else(|| CliError {
        exit_code: ExitCode::Usage,
        machine: MachineError::new("usage_error", "missing command; see --help"),
    })?;

    match command {
        Commands::Catalog {
            command: CatalogCommand::Validate { path },
        } => record_commands::validate_catalog(&path, output_mode),
        Commands::Compare { data, left, right } => record_commands::compare(
            &helpers::data_path(data.as_deref()),
            &left,
            &right,
            output_mode,
        ),
        Commands::Explore {
            data,
            providers,
            levels,
            code,
        } => record_commands::explore(
            &helpers::data_path(data.as_deref()),
            providers,
            levels,
            &code,
            output_mode,
        ),
        Commands::Path { data, id } => {
            record_commands::path(&helpers::data_path(data.as_deref()), &id, output_mode)
        }
        Commands::Openapi {
            command: OpenapiCommand::Generate { out },
        } => helpers::run_openapi_generate(out, output_mode),
        Commands::Version => emit_version(output_mode),
    }
}

fn emit_version(output_mode: OutputMode) -> Result<(), CliError> {
    let payload = json!({
        "name": "cloudpath",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": cloudpath_api::API_VERSION,
    });
    helpers::emit_ok(output_mode, &payload, || {
        format!("cloudpath {}", env!("CARGO_PKG_VERSION"))
    })
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
    }
}
