//! Shared fixtures for the format tests.

use arbor_babel::Tree;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// The tree every `catalog.*` fixture decodes to.
pub fn catalog_tree() -> Tree {
    Tree::mapping([
        ("name", Tree::from("Reading list")),
        (
            "owner",
            Tree::mapping([("id", "42"), ("email", "reader@example.com")]),
        ),
        (
            "book",
            Tree::sequence([
                Tree::mapping([("title", "Dune"), ("year", "1965"), ("available", "true")]),
                Tree::mapping([
                    ("title", "Solaris"),
                    ("year", "1961"),
                    ("available", "false"),
                ]),
            ]),
        ),
        ("notes", Tree::from("")),
    ])
}

#[test]
fn test_fixtures_exist() {
    for name in ["catalog.xml", "catalog.json", "catalog.yaml", "messy.xml"] {
        assert!(fixture_path(name).exists(), "missing fixture {name}");
    }
}
