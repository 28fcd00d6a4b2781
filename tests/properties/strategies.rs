//! Generated catalogs shared by the property suites.
//!
//! Tool names are drawn mostly from a small pool that repeats names and
//! differs only in case, so generated searches produce same-score ties,
//! case-sensitive orderings, and duplicate names.

use proptest::prelude::*;
use serde_json::json;

const NAMES: &[&str] = &[
    "alpha", "Alpha", "ALPHA", "beta", "Beta", "search tool", "Search Tool", "tor",
];

const WORDS: &[&str] = &[
    "search", "engine", "archive", "dark", "web", "alpha", "beta", "onion", "records",
];

const TAGS: &[&str] = &["tor", "history", "dns", "Alpha"];

pub fn tool_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(NAMES).prop_map(str::to_string),
        1 => "[A-Za-z][A-Za-z ]{0,11}",
    ]
}

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..5).prop_map(|words| words.join(" "))
}

fn tags() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(TAGS), 0..3)
}

/// Catalog JSON with unique category names and non-empty tool names.
pub fn catalog_json() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec((tool_name(), description(), tags()), 0..6),
        0..5,
    )
    .prop_map(|categories| {
        let categories: Vec<_> = categories
            .into_iter()
            .enumerate()
            .map(|(ci, tools)| {
                let tools: Vec<_> = tools
                    .into_iter()
                    .map(|(name, description, tags)| {
                        json!({
                            "name": name,
                            "description": description,
                            "url": "https://example.org",
                            "tags": tags,
                        })
                    })
                    .collect();
                json!({"name": format!("Category {ci}"), "tools": tools})
            })
            .collect();
        json!({ "categories": categories }).to_string()
    })
}

/// Queries that hit the name pool as well as free text.
pub fn query_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(NAMES).prop_map(str::to_string),
        prop::sample::select(WORDS).prop_map(str::to_string),
        "[a-z ]{1,12}",
    ]
}

/// "All" or one of the generated category names, present or not.
pub fn category_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("All".to_string()),
        (0usize..6).prop_map(|ci| format!("Category {ci}")),
    ]
}

/// `(category index, tool index)` from a `ci_ti` uid.
pub fn source_position(uid: &str) -> (usize, usize) {
    let (ci, ti) = uid.split_once('_').expect("uid is ci_ti");
    (ci.parse().expect("category index"), ti.parse().expect("tool index"))
}
