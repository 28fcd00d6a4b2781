use toolkit::catalog::{CatalogStore, FileSource, load, load_from_path};
use toolkit::search::{
    CachedSearcher, CategoryFilter, ResultCache, SearchEngine, SearchHit, SearchQuery, highlight,
    search, search_catalog,
};
use toolkit::test_utils::fixtures::{CatalogFixture, SAMPLE_CATALOG};
use toolkit::test_utils::{TestCase, run_table_tests};
use toolkit::ToolkitError;

fn names(hits: &[SearchHit]) -> Vec<String> {
    hits.iter().map(|h| h.tool.name.clone()).collect()
}

#[test]
fn scenario_queries() -> Result<(), String> {
    let catalog = load(SAMPLE_CATALOG.as_bytes()).expect("load sample");

    let cases = vec![
        TestCase {
            name: "search engine ties sort by name",
            input: ("search engine", "All"),
            expected: vec!["Ahmia".to_string(), "Shodan".to_string()],
            should_panic: false,
        },
        TestCase {
            name: "category filter excludes match",
            input: ("shodan", "Dark Web"),
            expected: Vec::new(),
            should_panic: false,
        },
        TestCase {
            name: "nonsense matches nothing",
            input: ("xyzxyz123", "All"),
            expected: Vec::new(),
            should_panic: false,
        },
        TestCase {
            name: "empty query lists category",
            input: ("", "Archives"),
            expected: vec!["Wayback Machine".to_string(), "archive.today".to_string()],
            should_panic: false,
        },
    ];

    run_table_tests(cases, |(query, category)| {
        let hits = search_catalog(&catalog, query, category, &[]);
        let mut found = names(&hits);
        // Only the leading matches are pinned for the tie scenario.
        if query == "search engine" {
            found.truncate(2);
        }
        found
    })?;
    Ok(())
}

#[test]
fn empty_query_covers_whole_catalog() {
    let catalog = load(SAMPLE_CATALOG.as_bytes()).unwrap();
    let hits = search(&catalog, &SearchQuery::new(""));
    assert_eq!(hits.len(), catalog.tool_count());
    assert!(hits.iter().all(|h| h.score == 100.0));
}

#[test]
fn uids_follow_catalog_position() {
    let catalog = load(SAMPLE_CATALOG.as_bytes()).unwrap();
    assert_eq!(catalog.tool("0_0").unwrap().name, "Shodan");
    assert_eq!(catalog.tool("1_0").unwrap().name, "Ahmia");
    assert_eq!(catalog.tool("2_1").unwrap().name, "archive.today");
    assert!(catalog.tool("3_0").is_none());
}

#[test]
fn missing_and_malformed_sources_differ() {
    let fixture = CatalogFixture::new();

    let missing = load_from_path(&fixture.root.join("nope.json")).unwrap_err();
    assert!(matches!(missing, ToolkitError::SourceNotFound(_)));

    let broken = fixture.write_catalog(r#"{"categories": [{"name": "x"}]}"#);
    let malformed = load_from_path(&broken).unwrap_err();
    assert!(matches!(malformed, ToolkitError::MalformedSource(_)));
    assert_ne!(missing.code(), malformed.code());
}

#[test]
fn file_backed_searcher_sees_reload_after_invalidate() {
    let fixture = CatalogFixture::new();
    let path = fixture.write_sample();

    let searcher = CachedSearcher::new(
        CatalogStore::with_default_ttl(FileSource::new(&path)),
        SearchEngine::default(),
        Some(ResultCache::default()),
    );
    let query = SearchQuery::new("").with_category(CategoryFilter::parse("Search Engines"));
    assert_eq!(names(&searcher.search(&query).unwrap()), vec!["Shodan"]);

    let _ = fixture.write_catalog(
        r#"{"categories": [{"name": "Search Engines", "tools": [
            {"name": "Censys", "description": "Host search", "url": "https://search.censys.io"}
        ]}]}"#,
    );
    // Memoized until invalidated.
    assert_eq!(names(&searcher.search(&query).unwrap()), vec!["Shodan"]);

    searcher.invalidate();
    assert_eq!(names(&searcher.search(&query).unwrap()), vec!["Censys"]);
}

#[test]
fn highlight_misses_tag_only_matches() {
    let catalog = load(SAMPLE_CATALOG.as_bytes()).unwrap();
    let hits = search(&catalog, &SearchQuery::new("tor"));
    let ahmia = hits.iter().find(|h| h.tool.name == "Ahmia").expect("tag match");

    // "tor" appears only in Ahmia's tags, so nothing in the name is marked.
    assert_eq!(highlight(&ahmia.tool.name, "tor"), "Ahmia");
    assert_eq!(
        highlight("Dark web search engine", "Search"),
        "Dark web <mark>search</mark> engine"
    );
}
