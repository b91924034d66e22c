//! Key/value (JSON) format tests

use crate::common::{catalog_tree, load_fixture};
use arbor_babel::format::Format;
use arbor_babel::formats::KeyValueFormat;
use arbor_babel::{FormatError, Tree};

#[test]
fn test_catalog_import() {
    let tree = KeyValueFormat::default()
        .parse(&load_fixture("catalog.json"))
        .unwrap();
    assert_eq!(tree, catalog_tree());
}

#[test]
fn test_catalog_export_matches_fixture() {
    let json = KeyValueFormat::default().serialize(&catalog_tree()).unwrap();
    assert_eq!(json, load_fixture("catalog.json"));
}

#[test]
fn test_key_order_survives_round_trip() {
    let format = KeyValueFormat::default();
    let tree = format.parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let json = format.serialize(&tree).unwrap();

    let z = json.find("\"z\"").unwrap();
    let a = json.find("\"a\"").unwrap();
    let m = json.find("\"m\"").unwrap();
    assert!(z < a && a < m, "keys were reordered: {json}");
}

#[test]
fn test_null_and_empty_string_both_decode_empty() {
    let tree = KeyValueFormat::default()
        .parse(r#"{"x": null, "y": ""}"#)
        .unwrap();
    assert_eq!(tree, Tree::mapping([("x", ""), ("y", "")]));
}

#[test]
fn test_top_level_array() {
    let tree = KeyValueFormat::default().parse("[1, [2], {}]").unwrap();
    assert_eq!(
        tree,
        Tree::Sequence(vec![
            Tree::from("1"),
            Tree::sequence(["2"]),
            Tree::mapping(Vec::<(String, Tree)>::new()),
        ])
    );
}

#[test]
fn test_strings_that_look_native_stay_strings() {
    let tree = Tree::mapping([("zip", "02134"), ("flag", "TRUE"), ("n", "12")]);
    let json = KeyValueFormat::new(0).serialize(&tree).unwrap();
    assert_eq!(json, "{\"zip\":\"02134\",\"flag\":\"TRUE\",\"n\":12}\n");
}

#[test]
fn test_trailing_garbage_is_decode_error() {
    let result = KeyValueFormat::default().parse("{} {}");
    assert!(matches!(result, Err(FormatError::Decode { .. })));
}
