//! Formatters for command output
//!
//! Each formatter implements [`Formattable`](crate::cli::output::Formattable)
//! so a command can render one value in any output format.

pub mod search_results;

pub use search_results::SearchResults;
