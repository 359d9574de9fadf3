//! Demo loader/sink around the statement engine: reads a catalog and an
//! invoice from JSON files and prints the rendered statement to stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use boxoffice_billing::{Invoice, PricingPolicy};
use boxoffice_plays::Catalog;

/// Render a plain-text billing statement for one invoice.
#[derive(Debug, Parser)]
#[command(name = "boxoffice", version, about)]
struct Args {
    /// Play catalog: JSON map of play id to {"name", "kind"}.
    #[arg(long)]
    catalog: PathBuf,

    /// Invoice: JSON {"customer", "performances": [{"play_id", "audience"}]}.
    #[arg(long)]
    invoice: PathBuf,

    /// Pricing policy override (JSON); defaults to the production tariff.
    #[arg(long)]
    policy: Option<PathBuf>,
}

fn main() -> ExitCode {
    boxoffice_observability::init();

    let args = Args::parse();
    match run(&args) {
        Ok(statement) => {
            print!("{statement}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("statement generation failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let catalog: Catalog = load_json(&args.catalog).context("loading catalog")?;
    let invoice: Invoice = load_json(&args.invoice).context("loading invoice")?;
    let policy: PricingPolicy = match &args.policy {
        Some(path) => load_json(path).context("loading pricing policy")?,
        None => PricingPolicy::default(),
    };

    tracing::info!(
        customer = %invoice.customer,
        performances = invoice.performances.len(),
        plays = catalog.len(),
        "rendering statement"
    );

    Ok(boxoffice_statement::render(&invoice, &catalog, &policy)?)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
