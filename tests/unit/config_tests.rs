use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use toolkit::config::Config;
use toolkit::layout::DisplayMode;
use toolkit::test_utils::fixtures::CatalogFixture;
use toolkit::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn config_sections_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (
                PathBuf::from("data/osint_tools.json"),
                65,
                true,
                Duration::from_secs(3600),
                Duration::from_secs(300),
                128usize,
                DisplayMode::Desktop,
            ),
            should_panic: false,
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (
                PathBuf::from("/srv/osint/catalog.json"),
                80,
                false,
                Duration::from_secs(3600),
                Duration::from_secs(30),
                128usize,
                DisplayMode::Phone,
            ),
            should_panic: false,
        },
        TestCase {
            name: "partial",
            input: "tests/fixtures/configs/partial.toml",
            expected: (
                PathBuf::from("data/osint_tools.json"),
                65,
                true,
                Duration::from_secs(3600),
                Duration::from_secs(300),
                16usize,
                DisplayMode::Desktop,
            ),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let path = fixture_path(relative_path);
        let content = fs::read_to_string(&path).expect("read fixture");
        let config: Config = toml::from_str(&content).expect("parse config");
        (
            config.catalog.path,
            config.search.threshold.round() as i64,
            config.cache.enabled,
            config.cache.catalog_ttl,
            config.cache.results_ttl,
            config.cache.max_results,
            config.display.mode,
        )
    })?;
    Ok(())
}

#[test]
fn project_file_is_picked_up() {
    let fixture = CatalogFixture::new();
    let _ = fixture.write_config("[display]\nmode = \"tablet\"\n[search]\nthreshold = 70.0\n");

    let config = Config::load(None, &fixture.root).expect("load config");
    assert_eq!(config.display.mode, DisplayMode::Tablet);
    assert!((config.search.threshold - 70.0).abs() < f64::EPSILON);
    assert_eq!(
        config.catalog_path(&fixture.root),
        fixture.root.join("data/osint_tools.json")
    );
}

#[test]
fn unknown_display_mode_is_rejected() {
    let fixture = CatalogFixture::new();
    let path = fixture.create_file("bad.toml", "[display]\nmode = \"watch\"\n");
    assert!(Config::load(Some(&path), &fixture.root).is_err());
}
