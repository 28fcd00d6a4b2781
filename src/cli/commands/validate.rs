//! toolkit validate - Check that a catalog source loads
//!
//! Runs without an [`AppContext`](crate::app::AppContext) so a broken
//! configured catalog can still be diagnosed.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::app::find_root;
use crate::catalog::{Catalog, load_from_path};
use crate::cli::Cli;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::config::Config;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file (defaults to the configured catalog path)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    path: PathBuf,
    categories: usize,
    tools: usize,
    tags: usize,
}

impl ValidationReport {
    fn new(path: &Path, catalog: &Catalog) -> Self {
        Self {
            path: path.to_path_buf(),
            categories: catalog.categories().len(),
            tools: catalog.tool_count(),
            tags: catalog.all_tags().len(),
        }
    }
}

pub fn run(cli: &Cli, args: &ValidateArgs) -> Result<()> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => {
            let root = find_root()?;
            Config::load(cli.config.as_deref(), &root)?.catalog_path(&root)
        }
    };

    validate_path(&path, cli.output_format())
}

fn validate_path(path: &Path, format: OutputFormat) -> Result<()> {
    let catalog = load_from_path(path)?;
    let report = ValidationReport::new(path, &catalog);
    info!(target: "cli", path = %path.display(), tools = report.tools, "catalog is valid");

    match format {
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title("Catalog OK");
            layout
                .kv("Path", &report.path.display().to_string())
                .kv("Categories", &report.categories.to_string())
                .kv("Tools", &report.tools.to_string())
                .kv("Tags", &report.tags.to_string());
            emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(&report)),
        OutputFormat::Jsonl => {
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
        OutputFormat::Plain => {
            println!(
                "ok\t{}\t{}\t{}",
                report.path.display(),
                report.categories,
                report.tools
            );
            Ok(())
        }
        OutputFormat::Tsv => {
            println!("path\tcategories\ttools\ttags");
            println!(
                "{}\t{}\t{}\t{}",
                report.path.display(),
                report.categories,
                report.tools,
                report.tags
            );
            Ok(())
        }
    }
}
