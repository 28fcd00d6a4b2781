//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command
//!
//! Catalog-backed commands get an [`AppContext`], which fails fast on a
//! missing or malformed catalog. `validate` only needs the parsed CLI so it
//! can diagnose exactly that case.

use clap::Subcommand;

pub mod categories;
pub mod search;
pub mod show;
pub mod validate;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Search(args) => search::run(&AppContext::from_cli(cli)?, args),
        Commands::Categories(args) => categories::run(&AppContext::from_cli(cli)?, args),
        Commands::Show(args) => show::run(&AppContext::from_cli(cli)?, args),
        Commands::Validate(args) => validate::run(cli, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuzzy search the catalog
    Search(search::SearchArgs),

    /// List categories with tool counts
    Categories(categories::CategoriesArgs),

    /// Show one tool by uid
    Show(show::ShowArgs),

    /// Check that a catalog file loads
    Validate(validate::ValidateArgs),
}
