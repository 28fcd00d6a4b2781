//! toolkit show - Show one tool's details

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::{Tool, category_icon};
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_robot, escape_tsv, robot_ok,
};
use crate::error::{Result, ToolkitError};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Tool uid, as printed by `toolkit search` (e.g. 0_3)
    pub uid: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let snapshot = ctx.searcher.catalog()?;
    let tool = snapshot
        .catalog
        .tool(&args.uid)
        .ok_or_else(|| ToolkitError::NotFound(args.uid.clone()))?;

    debug!(target: "cli", uid = %tool.uid, mode = ?ctx.output_format, "showing tool");

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(render_human(tool));
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(tool)),
        OutputFormat::Jsonl => {
            println!("{}", serde_json::to_string(tool)?);
            Ok(())
        }
        OutputFormat::Plain => {
            println!("{}", render_plain(tool));
            Ok(())
        }
        OutputFormat::Tsv => {
            println!("uid\tname\tcategory\turl\ttags\tdescription");
            println!("{}", render_tsv_row(tool));
            Ok(())
        }
    }
}

fn render_human(tool: &Tool) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("{} {}", category_icon(&tool.category), tool.name));
    layout
        .kv("uid", &tool.uid)
        .kv("category", &tool.category)
        .kv("url", &tool.url);
    if !tool.tags.is_empty() {
        layout.kv("tags", &tool.tags.join(", "));
    }
    if !tool.description.is_empty() {
        layout.blank();
        for line in textwrap::wrap(&tool.description, 78) {
            layout.bullet(&line);
        }
    }
    layout
}

fn render_plain(tool: &Tool) -> String {
    let mut lines = vec![
        format!("uid: {}", tool.uid),
        format!("name: {}", escape_tsv(&tool.name)),
        format!("category: {}", escape_tsv(&tool.category)),
        format!("url: {}", escape_tsv(&tool.url)),
    ];
    if !tool.tags.is_empty() {
        lines.push(format!("tags: {}", escape_tsv(&tool.tags.join(", "))));
    }
    lines.push(format!("description: {}", escape_tsv(&tool.description)));
    lines.join("\n")
}

fn render_tsv_row(tool: &Tool) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        tool.uid,
        escape_tsv(&tool.name),
        escape_tsv(&tool.category),
        escape_tsv(&tool.url),
        escape_tsv(&tool.tags.join(",")),
        escape_tsv(&tool.description)
    )
}
