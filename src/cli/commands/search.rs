//! toolkit search - Fuzzy search the catalog

use std::time::Instant;

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::SearchResults;
use crate::cli::output::Formattable;
use crate::error::Result;
use crate::layout::DisplayMode;
use crate::search::{ALL_CATEGORIES, CategoryFilter, SearchQuery, TagFilter};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (omit to list every tool)
    pub query: Option<String>,

    /// Restrict to one category ("All" for every category)
    #[arg(long, short, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Keep tools carrying any of these tags
    #[arg(long = "tag", short)]
    pub tags: Vec<String>,

    /// Grid layout for human output: phone, tablet, desktop
    #[arg(long, value_parser = parse_display_mode)]
    pub display_mode: Option<DisplayMode>,

    /// Maximum number of results to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

fn parse_display_mode(value: &str) -> std::result::Result<DisplayMode, String> {
    value.parse().map_err(|err: crate::error::ToolkitError| err.to_string())
}

impl SearchArgs {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.query.clone().unwrap_or_default())
            .with_category(CategoryFilter::parse(&self.category))
            .with_tags(TagFilter::new(self.tags.iter().cloned()))
    }
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let query = args.to_query();

    let start = Instant::now();
    let mut hits = ctx.searcher.search(&query)?;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(
        target: "search",
        query = %query.text,
        results = hits.len(),
        duration_ms,
        "search command finished"
    );

    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    let results = SearchResults::new(query.text.clone(), query.category.as_str(), hits)
        .with_tags(query.tags.tags().map(String::from).collect())
        .with_duration(duration_ms)
        .with_display_mode(args.display_mode.unwrap_or(ctx.config.display.mode));

    println!("{}", results.format(ctx.output_format));
    Ok(())
}
