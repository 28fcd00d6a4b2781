use proptest::prelude::*;

use toolkit::catalog::{Catalog, load};
use toolkit::search::{
    CategoryFilter, DEFAULT_THRESHOLD, SearchHit, SearchQuery, partial_ratio, search,
};
use toolkit::test_utils::fixtures::SAMPLE_CATALOG;

use crate::strategies::{catalog_json, category_name, query_text, source_position};

fn generated(source: &str) -> Catalog {
    load(source.as_bytes()).unwrap()
}

fn check_total_order(hits: &[SearchHit]) -> Result<(), TestCaseError> {
    for pair in hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        prop_assert!(
            a.score > b.score || (a.score == b.score && a.tool.name <= b.tool.name),
            "{} ({}) before {} ({})", a.tool.name, a.score, b.tool.name, b.score
        );
        if a.score == b.score && a.tool.name == b.tool.name {
            prop_assert!(
                source_position(&a.tool.uid) < source_position(&b.tool.uid),
                "tie on {} broke source order: {} before {}", a.tool.name, a.tool.uid, b.tool.uid
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn partial_ratio_is_bounded_and_symmetric(a in ".{0,16}", b in ".{0,16}") {
        let ab = partial_ratio(&a, &b);
        prop_assert!((0.0..=100.0).contains(&ab));
        prop_assert_eq!(ab, partial_ratio(&b, &a));
    }

    #[test]
    fn substring_scores_full(prefix in "[a-z]{0,6}", needle in "[a-z]{1,6}", suffix in "[a-z]{0,6}") {
        let hay = format!("{prefix}{needle}{suffix}");
        prop_assert_eq!(partial_ratio(&needle, &hay), 100.0);
    }

    #[test]
    fn empty_query_is_complete(source in catalog_json(), ws in " {0,3}") {
        let catalog = generated(&source);
        let hits = search(&catalog, &SearchQuery::new(ws));
        prop_assert_eq!(hits.len(), catalog.tool_count());
        prop_assert!(hits.iter().all(|h| h.score == 100.0));
        check_total_order(&hits)?;
    }

    #[test]
    fn category_filter_is_exact(source in catalog_json(), text in query_text(), name in category_name()) {
        let catalog = generated(&source);
        let query = SearchQuery::new(text).with_category(CategoryFilter::parse(&name));
        for hit in search(&catalog, &query) {
            if name != "All" {
                prop_assert_eq!(&hit.category, &name);
            }
            prop_assert_eq!(&hit.tool.category, &hit.category);
        }
    }

    #[test]
    fn non_empty_query_respects_threshold(source in catalog_json(), text in "[a-zA-Z]{1,12}") {
        let catalog = generated(&source);
        for hit in search(&catalog, &SearchQuery::new(text)) {
            prop_assert!(hit.score >= DEFAULT_THRESHOLD);
        }
    }

    #[test]
    fn search_is_deterministic(source in catalog_json(), text in query_text(), name in category_name()) {
        let catalog = generated(&source);
        let query = SearchQuery::new(text).with_category(CategoryFilter::parse(&name));
        prop_assert_eq!(search(&catalog, &query), search(&catalog, &query));
    }

    #[test]
    fn results_are_totally_ordered(source in catalog_json(), text in query_text()) {
        let catalog = generated(&source);
        check_total_order(&search(&catalog, &SearchQuery::new(text)))?;
    }
}

#[test]
fn duplicate_names_keep_source_order_on_ties() {
    let catalog = load(
        br#"{"categories": [
            {"name": "A", "tools": [
                {"name": "alpha", "description": "", "url": "u"},
                {"name": "Alpha", "description": "", "url": "u"},
                {"name": "alpha", "description": "", "url": "u"}
            ]},
            {"name": "B", "tools": [
                {"name": "alpha", "description": "", "url": "u"},
                {"name": "ALPHA", "description": "", "url": "u"}
            ]}
        ]}"#,
    )
    .unwrap();

    for text in ["", "alpha"] {
        let uids: Vec<_> = search(&catalog, &SearchQuery::new(text))
            .into_iter()
            .map(|hit| hit.tool.uid)
            .collect();
        assert_eq!(uids, ["1_1", "0_1", "0_0", "0_2", "1_0"], "query {text:?}");
    }
}

#[test]
fn sample_catalog_empty_query_lists_everything() {
    let catalog = load(SAMPLE_CATALOG.as_bytes()).unwrap();
    let hits = search(&catalog, &SearchQuery::new(""));
    assert_eq!(hits.len(), catalog.tool_count());
}
