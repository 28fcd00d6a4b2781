//! toolkit categories - List catalog categories with tool counts

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::{Catalog, NO_TAGS_SENTINEL, category_icon};
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_robot, escape_tsv, robot_ok,
};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Also list every tag used in the catalog
    #[arg(long)]
    pub tags: bool,
}

#[derive(Debug, Serialize)]
struct CategorySummary<'a> {
    name: &'a str,
    icon: &'static str,
    tool_count: usize,
}

#[derive(Debug, Serialize)]
struct CategoriesReport<'a> {
    count: usize,
    tool_count: usize,
    categories: Vec<CategorySummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
}

fn build_report<'a>(catalog: &'a Catalog, with_tags: bool) -> CategoriesReport<'a> {
    CategoriesReport {
        count: catalog.categories().len(),
        tool_count: catalog.tool_count(),
        categories: catalog
            .categories()
            .iter()
            .map(|category| CategorySummary {
                name: &category.name,
                icon: category_icon(&category.name),
                tool_count: category.tools.len(),
            })
            .collect(),
        tags: with_tags.then(|| available_tags(catalog)),
    }
}

/// Every tag in the catalog, or the placeholder when there are none.
fn available_tags(catalog: &Catalog) -> Vec<String> {
    let tags = catalog.all_tags();
    if tags.is_empty() {
        vec![NO_TAGS_SENTINEL.to_string()]
    } else {
        tags
    }
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let snapshot = ctx.searcher.catalog()?;
    let report = build_report(&snapshot.catalog, args.tags);
    debug!(target: "cli", categories = report.count, tools = report.tool_count, "listing categories");

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(&report));
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(&report)),
        OutputFormat::Jsonl => {
            for category in &report.categories {
                println!("{}", serde_json::to_string(category)?);
            }
            Ok(())
        }
        OutputFormat::Plain => {
            for category in &report.categories {
                println!("{}\t{}", escape_tsv(category.name), category.tool_count);
            }
            Ok(())
        }
        OutputFormat::Tsv => {
            print!("{}", render_tsv(&report));
            Ok(())
        }
    }
}

fn render_tsv(report: &CategoriesReport<'_>) -> String {
    let mut out = String::from("name\ticon\ttools\n");
    for category in &report.categories {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            escape_tsv(category.name),
            category.icon,
            category.tool_count
        ));
    }
    out
}

fn render_human(report: &CategoriesReport<'_>) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!(
        "{} categories with {} tools",
        report.count, report.tool_count
    ));
    for category in &report.categories {
        layout.bullet(&format!(
            "{} {} ({})",
            category.icon, category.name, category.tool_count
        ));
    }
    if let Some(tags) = &report.tags {
        layout.blank();
        layout.section("Tags");
        for tag in tags {
            layout.bullet(tag);
        }
    }
    layout
}
