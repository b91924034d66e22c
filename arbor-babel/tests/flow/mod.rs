//! Flow (YAML) format tests

use crate::common::{catalog_tree, load_fixture};
use arbor_babel::format::Format;
use arbor_babel::formats::{FlowFormat, KeyValueFormat};
use arbor_babel::{FormatError, Tree};

#[test]
fn test_catalog_import() {
    let tree = FlowFormat.parse(&load_fixture("catalog.yaml")).unwrap();
    assert_eq!(tree, catalog_tree());
}

#[test]
fn test_catalog_export_matches_fixture() {
    let yaml = FlowFormat.serialize(&catalog_tree()).unwrap();
    assert_eq!(yaml, load_fixture("catalog.yaml"));
}

#[test]
fn test_key_order_preserved_into_keyvalue() {
    let tree = FlowFormat.parse("z: 1\na: 2\nm: 3\n").unwrap();
    let json = KeyValueFormat::new(0).serialize(&tree).unwrap();
    assert_eq!(json, "{\"z\":1,\"a\":2,\"m\":3}\n");

    let back = FlowFormat.serialize(&tree).unwrap();
    assert_eq!(back, "z: 1\na: 2\nm: 3\n");
}

#[test]
fn test_null_decodes_to_empty_scalar() {
    let tree = FlowFormat.parse("{x: null}").unwrap();
    assert_eq!(tree, Tree::mapping([("x", "")]));

    let tree = FlowFormat.parse("x: ~\ny:\n").unwrap();
    assert_eq!(tree, Tree::mapping([("x", ""), ("y", "")]));
}

#[test]
fn test_long_strings_are_not_folded() {
    let long = "word ".repeat(40).trim_end().to_string();
    let tree = Tree::mapping([("text", Tree::from(long.clone()))]);
    let yaml = FlowFormat.serialize(&tree).unwrap();

    assert_eq!(yaml.lines().count(), 1);
    assert_eq!(FlowFormat.parse(&yaml).unwrap(), tree);
}

#[test]
fn test_multiple_documents_is_decode_error() {
    let result = FlowFormat.parse("a: 1\n---\nb: 2\n");
    assert!(matches!(result, Err(FormatError::Decode { .. })));
}

#[test]
fn test_tagged_value_is_decode_error() {
    let result = FlowFormat.parse("a: !custom value\n");
    assert!(matches!(result, Err(FormatError::Decode { .. })));
}
