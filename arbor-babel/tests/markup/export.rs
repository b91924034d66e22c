//! Export tests for the markup format (Tree → XML)

use crate::common::{catalog_tree, load_fixture};
use arbor_babel::format::Format;
use arbor_babel::formats::{MarkupFormat, MarkupOptions};
use arbor_babel::{FormatError, Tree};
use insta::assert_snapshot;
use std::collections::HashMap;

fn tree_to_xml(tree: &Tree) -> String {
    MarkupFormat::default()
        .serialize(tree)
        .expect("Should serialize XML")
}

#[test]
fn test_catalog_matches_fixture() {
    assert_eq!(tree_to_xml(&catalog_tree()), load_fixture("catalog.xml"));
}

#[test]
fn test_nested_sequences_snapshot() {
    let tree = Tree::mapping([
        (
            "server",
            Tree::sequence([
                Tree::mapping([("host", Tree::from("alpha")), ("port", Tree::from("80"))]),
                Tree::mapping([
                    ("host", Tree::from("beta")),
                    ("alias", Tree::sequence(["b1", "b2"])),
                ]),
            ]),
        ),
        ("empty", Tree::mapping(Vec::<(String, Tree)>::new())),
    ]);

    assert_snapshot!(tree_to_xml(&tree), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <root>
      <server>
        <host>alpha</host>
        <port>80</port>
      </server>
      <server>
        <host>beta</host>
        <alias>b1</alias>
        <alias>b2</alias>
      </server>
      <empty/>
    </root>
    "#);
}

#[test]
fn test_one_element_sequence_reads_back_bare() {
    // A list of one cannot be told apart from a single value in XML.
    let tree = Tree::mapping([("item", Tree::sequence(["x"]))]);
    let xml = tree_to_xml(&tree);
    let back = MarkupFormat::default().parse(&xml).unwrap();
    assert_eq!(back, Tree::mapping([("item", "x")]));
}

#[test]
fn test_serialize_with_options_root_tag() {
    let mut options = HashMap::new();
    options.insert("root-tag".to_string(), "config".to_string());
    options.insert("declaration".to_string(), "false".to_string());

    let xml = MarkupFormat::default()
        .serialize_with_options(&Tree::mapping([("debug", "true")]), &options)
        .unwrap();
    assert_eq!(xml, "<config>\n  <debug>true</debug>\n</config>\n");
}

#[test]
fn test_invalid_root_tag_is_encode_error() {
    let format = MarkupFormat::new(MarkupOptions {
        root_tag: "my root".to_string(),
        ..MarkupOptions::default()
    });
    let result = format.serialize(&Tree::scalar("x"));
    assert!(matches!(result, Err(FormatError::Encode { .. })));
}

#[test]
fn test_key_from_json_with_space_is_encode_error() {
    let tree = Tree::mapping([("first name", "Ada")]);
    let result = MarkupFormat::default().serialize(&tree);
    match result {
        Err(FormatError::Encode { format, message }) => {
            assert_eq!(format, "markup");
            assert!(message.contains("first name"));
        }
        other => panic!("Expected Encode error, got {other:?}"),
    }
}
