//! Search results formatter
//!
//! Renders search hits as a card grid laid out by display mode (Human mode
//! on a capable terminal), a numbered plain list (Human mode when piped),
//! plain TSV, JSON, JSONL, and full TSV with headers.

use console::{Alignment, pad_str, style};
use serde::Serialize;
use tracing::debug;

use crate::catalog::category_icon;
use crate::cli::output::{Formattable, OutputFormat, escape_tsv, robot_ok};
use crate::layout::{DisplayMode, grid};
use crate::search::{SearchHit, highlight_with};

/// Gap between cards in the grid.
const CARD_GAP: usize = 2;

/// Narrowest card the grid will render.
const MIN_CARD_WIDTH: usize = 20;

const EMPTY_MESSAGE: &str =
    "No tools found matching your criteria. Try adjusting your filters or search terms.";

/// Search results collection for formatted display
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// The raw query as typed
    pub query: String,
    /// Category filter label ("All" for none)
    pub category: String,
    /// Tag filter, sorted
    pub tags: Vec<String>,
    /// Ranked hits
    pub results: Vec<SearchHit>,
    /// Search duration in milliseconds
    pub duration_ms: Option<u64>,
    /// Grid layout for human output
    pub display_mode: DisplayMode,
}

/// Serializable search result for JSON output
#[derive(Debug, Clone, Serialize)]
struct SearchResultJson<'a> {
    uid: &'a str,
    name: &'a str,
    description: &'a str,
    url: &'a str,
    tags: &'a [String],
    category: &'a str,
    score: f64,
}

impl<'a> From<&'a SearchHit> for SearchResultJson<'a> {
    fn from(hit: &'a SearchHit) -> Self {
        Self {
            uid: &hit.tool.uid,
            name: &hit.tool.name,
            description: &hit.tool.description,
            url: &hit.tool.url,
            tags: &hit.tool.tags,
            category: &hit.category,
            score: hit.score,
        }
    }
}

/// Search payload, wrapped in the robot envelope for JSON output
#[derive(Debug, Clone, Serialize)]
struct SearchResponseJson<'a> {
    query: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    tags: &'a [String],
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
    results: Vec<SearchResultJson<'a>>,
}

impl SearchResults {
    /// Create a new search results collection
    pub fn new(query: impl Into<String>, category: impl Into<String>, results: Vec<SearchHit>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
            tags: Vec::new(),
            results,
            duration_ms: None,
            display_mode: DisplayMode::default(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the search duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub const fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    fn to_json_response(&self) -> SearchResponseJson<'_> {
        SearchResponseJson {
            query: &self.query,
            category: &self.category,
            tags: &self.tags,
            count: self.results.len(),
            duration_ms: self.duration_ms,
            results: self.results.iter().map(SearchResultJson::from).collect(),
        }
    }

    fn format_human(&self) -> String {
        let use_rich = should_use_rich();
        let mode = if use_rich { "rich" } else { "plain" };
        debug!(target: "search", mode, "output mode selected");

        if self.results.is_empty() {
            self.format_empty_results(use_rich)
        } else {
            self.format_populated_results(use_rich, terminal_width())
        }
    }

    fn format_empty_results(&self, use_rich: bool) -> String {
        if use_rich {
            format!("{} {EMPTY_MESSAGE}", style("ℹ").cyan())
        } else {
            format!("! {EMPTY_MESSAGE}")
        }
    }

    fn format_populated_results(&self, use_rich: bool, width: usize) -> String {
        let mut out = self.build_metadata_header();
        out.push_str("\n\n");

        if use_rich {
            out.push_str(&self.render_grid(width));
        } else {
            for (i, hit) in self.results.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} [{:.0}] {}\n",
                    i + 1,
                    hit.tool.name,
                    hit.score,
                    hit.category,
                ));
                if !hit.tool.description.is_empty() {
                    out.push_str(&format!("   {}\n", hit.tool.description));
                }
                out.push_str(&format!("   {}\n\n", hit.tool.url));
            }
        }
        out
    }

    /// Lay cards out in rows of `display_mode.columns()`.
    fn render_grid(&self, width: usize) -> String {
        let columns = self.display_mode.columns();
        let card_width = (width.saturating_sub(CARD_GAP * (columns - 1)) / columns).max(MIN_CARD_WIDTH);
        let gap = " ".repeat(CARD_GAP);

        let mut out = String::new();
        for row in grid(self.results.len(), self.display_mode) {
            let cards: Vec<Vec<String>> = row
                .iter()
                .map(|&index| self.render_card(&self.results[index], card_width))
                .collect();
            let height = cards.iter().map(Vec::len).max().unwrap_or(0);

            for line in 0..height {
                let cells: Vec<String> = cards
                    .iter()
                    .map(|card| {
                        let text = card.get(line).map_or("", String::as_str);
                        pad_str(text, card_width, Alignment::Left, Some("…")).into_owned()
                    })
                    .collect();
                out.push_str(cells.join(gap.as_str()).trim_end());
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn render_card(&self, hit: &SearchHit, width: usize) -> Vec<String> {
        let emphasize = |m: &str| style(m).bold().underlined().to_string();
        let title = highlight_with(&hit.tool.name, &self.query, emphasize);
        let description = highlight_with(&hit.tool.description, &self.query, emphasize);

        let mut lines = vec![
            format!("{} {}", category_icon(&hit.category), style(title).bold()),
            style(format!("[{}]", hit.category)).cyan().to_string(),
        ];
        lines.extend(
            textwrap::wrap(&description, width)
                .into_iter()
                .map(|line| line.into_owned()),
        );
        lines.push(style(format!("🔗 {}", hit.tool.url)).dim().to_string());
        lines
    }

    /// Build the metadata header line summarizing the search.
    fn build_metadata_header(&self) -> String {
        let mut header = if self.query.trim().is_empty() {
            format!("{} tools in {}", self.results.len(), self.category)
        } else {
            format!(
                "{} results for '{}' in {}",
                self.results.len(),
                self.query,
                self.category,
            )
        };
        if !self.tags.is_empty() {
            header.push_str(&format!(" tagged {}", self.tags.join(", ")));
        }
        if let Some(ms) = self.duration_ms {
            header.push_str(&format!(" ({ms}ms)"));
        }
        header
    }

    /// SCORE<TAB>NAME<TAB>CATEGORY<TAB>DESCRIPTION, no header.
    fn format_plain(&self) -> String {
        self.results
            .iter()
            .map(|hit| {
                format!(
                    "{:.0}\t{}\t{}\t{}",
                    hit.score,
                    escape_tsv(&hit.tool.name),
                    escape_tsv(&hit.category),
                    escape_tsv(&hit.tool.description)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = String::from("uid\tname\tcategory\tscore\turl\tdescription\n");
        for hit in &self.results {
            out.push_str(&format!(
                "{}\t{}\t{}\t{:.0}\t{}\t{}\n",
                hit.tool.uid,
                escape_tsv(&hit.tool.name),
                escape_tsv(&hit.category),
                hit.score,
                escape_tsv(&hit.tool.url),
                escape_tsv(&hit.tool.description)
            ));
        }
        out
    }

    fn format_jsonl(&self) -> String {
        self.results
            .iter()
            .filter_map(|hit| serde_json::to_string(&SearchResultJson::from(hit)).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for SearchResults {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&robot_ok(self.to_json_response())).unwrap_or_default()
            }
            OutputFormat::Jsonl => self.format_jsonl(),
            OutputFormat::Plain => self.format_plain(),
            OutputFormat::Tsv => self.format_tsv(),
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Rich output only on a terminal, and never when NO_COLOR or
/// TOOLKIT_PLAIN_OUTPUT is set.
fn should_use_rich() -> bool {
    use std::io::IsTerminal;

    if std::env::var("TOOLKIT_FORCE_RICH").is_ok() {
        return true;
    }
    if std::env::var("NO_COLOR").is_ok() || std::env::var("TOOLKIT_PLAIN_OUTPUT").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Get the terminal width, defaulting to 80 if detection fails.
fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map_or(80, |(_, cols)| usize::from(cols))
}
