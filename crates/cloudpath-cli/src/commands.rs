// SPDX-License-Identifier: Apache-2.0

use clap::Subcommand;
use cloudpath_model::{Level, Provider};
use std::path::PathBuf;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Record file checks.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Compare two certifications side by side.
    Compare {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        left: String,
        #[arg(long)]
        right: String,
    },
    /// Filter by provider, level and exam code, grouped by level.
    Explore {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long = "provider", value_parser = parse_provider)]
        providers: Vec<Provider>,
        #[arg(long = "level", value_parser = parse_level)]
        levels: Vec<Level>,
        #[arg(long, default_value = "")]
        code: String,
    },
    /// Prerequisites and successors of one certification.
    Path {
        #[arg(long)]
        data: Option<PathBuf>,
        id: String,
    },
    Openapi {
        #[command(subcommand)]
        command: OpenapiCommand,
    },
    Version,
}

#[derive(Subcommand)]
pub(crate) enum CatalogCommand {
    Validate { path: PathBuf },
}

#[derive(Subcommand)]
pub(crate) enum OpenapiCommand {
    Generate {
        #[arg(long, default_value = "openapi/v1/openapi.json")]
        out: PathBuf,
    },
}

fn parse_provider(raw: &str) -> Result<Provider, String> {
    raw.parse::<Provider>().map_err(|e| e.to_string())
}

fn parse_level(raw: &str) -> Result<Level, String> {
    raw.parse::<Level>().map_err(|e| e.to_string())
}
