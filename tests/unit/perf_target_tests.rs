//! Performance target tests for CI regression detection.
//!
//! These run in the test profile, so ceilings are relaxed well past the
//! release targets measured by `cargo bench`:
//! - long free-text query over a 300-tool catalog: < 200ms release, < 5s here
//! - typo query over a 1000-tool catalog: < 50ms release, < 2s here

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde_json::json;
use toolkit::catalog::{Catalog, load};
use toolkit::search::{SearchQuery, search};

const WORDS: &[&str] = &[
    "search", "engine", "archive", "dark", "web", "image", "reverse", "domain", "email",
    "username", "metadata", "geolocation", "threat", "intel", "records", "breach",
];

/// Helper to measure operation time with warmup
fn measure_op<F, R>(warmup_iterations: usize, measure_iterations: usize, mut op: F) -> Duration
where
    F: FnMut() -> R,
{
    for _ in 0..warmup_iterations {
        let _ = black_box(op());
    }

    let start = Instant::now();
    for _ in 0..measure_iterations {
        let _ = black_box(op());
    }
    start.elapsed() / measure_iterations as u32
}

fn synthetic_catalog(categories: usize, per_category: usize) -> Catalog {
    let categories: Vec<_> = (0..categories)
        .map(|ci| {
            let tools: Vec<_> = (0..per_category)
                .map(|ti| {
                    let word = |n: usize| WORDS[(ci * 7 + ti * 3 + n) % WORDS.len()];
                    json!({
                        "name": format!("{} {} {ti}", word(0), word(1)),
                        "description": format!(
                            "{} {} {} lookups across {} and {} sources",
                            word(2), word(3), word(4), word(5), word(6)
                        ),
                        "url": format!("https://tool-{ci}-{ti}.example"),
                        "tags": [word(7), word(8)],
                    })
                })
                .collect();
            json!({"name": format!("Category {ci}"), "tools": tools})
        })
        .collect();
    let source = json!({ "categories": categories }).to_string();
    load(source.as_bytes()).expect("synthetic catalog")
}

/// A pasted paragraph rather than a few keywords.
fn long_query() -> String {
    let mut query = String::new();
    let mut i = 0;
    while query.chars().count() < 975 {
        query.push_str(WORDS[(i * 5) % WORDS.len()]);
        query.push(' ');
        i += 1;
    }
    query.chars().take(975).collect()
}

#[test]
fn test_long_query_performance_target() {
    let catalog = synthetic_catalog(15, 20);
    assert_eq!(catalog.tool_count(), 300);
    let query = SearchQuery::new(long_query());

    let per_op = measure_op(1, 3, || search(&catalog, black_box(&query)));

    println!("[PERF] long_query_300_tools: {per_op:?} per search");

    assert!(
        per_op < Duration::from_secs(5),
        "975-char query over 300 tools exceeded 5s CI ceiling: {per_op:?}"
    );
}

#[test]
fn test_typo_query_performance_target() {
    let catalog = synthetic_catalog(50, 20);
    let query = SearchQuery::new("serch engin");

    let per_op = measure_op(2, 10, || search(&catalog, black_box(&query)));

    println!("[PERF] typo_query_1000_tools: {per_op:?} per search");

    assert!(
        per_op < Duration::from_secs(2),
        "typo query over 1000 tools exceeded 2s CI ceiling: {per_op:?}"
    );
}
