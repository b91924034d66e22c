//! Import tests for the markup format (XML → Tree)

use crate::common::{catalog_tree, load_fixture};
use arbor_babel::format::Format;
use arbor_babel::formats::MarkupFormat;
use arbor_babel::{FormatError, Tree};

fn xml_to_tree(xml: &str) -> Tree {
    MarkupFormat::default().parse(xml).expect("Should parse XML")
}

#[test]
fn test_repeated_tags_fold_into_sequence() {
    let tree = xml_to_tree("<root><item>a</item><item>b</item></root>");
    assert_eq!(tree, Tree::mapping([("item", Tree::sequence(["a", "b"]))]));
}

#[test]
fn test_single_tag_stays_bare_value() {
    let tree = xml_to_tree("<root><item>x</item></root>");
    assert_eq!(tree, Tree::mapping([("item", "x")]));
}

#[test]
fn test_empty_element_is_empty_scalar() {
    assert_eq!(xml_to_tree("<x></x>"), Tree::scalar(""));
    assert_eq!(xml_to_tree("<root><x/></root>"), Tree::mapping([("x", "")]));
}

#[test]
fn test_folding_keeps_first_position() {
    let tree = xml_to_tree("<root><a>1</a><b>2</b><a>3</a><c>4</c><a>5</a></root>");
    let mapping = tree.as_mapping().expect("mapping");

    assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(mapping.get("a"), Some(&Tree::sequence(["1", "3", "5"])));
}

#[test]
fn test_catalog_fixture() {
    let tree = xml_to_tree(&load_fixture("catalog.xml"));
    assert_eq!(tree, catalog_tree());
}

#[test]
fn test_messy_fixture() {
    let tree = xml_to_tree(&load_fixture("messy.xml"));

    let expected = Tree::mapping([
        ("warehouse", Tree::from("North")),
        (
            "item",
            Tree::sequence([
                Tree::mapping([("name", "Bolt & nut"), ("qty", "10")]),
                Tree::mapping([("name", "Washer"), ("qty", "")]),
                Tree::mapping([
                    ("name", Tree::from("Spring")),
                    ("qty", Tree::from("3")),
                    ("tag", Tree::sequence(["steel", "small"])),
                ]),
            ]),
        ),
        ("note", Tree::from("fragile <handle with care>")),
    ]);
    assert_eq!(tree, expected);
}

#[test]
fn test_unclosed_tag_is_decode_error() {
    let result = MarkupFormat::default().parse("<root><a>1</root>");
    assert!(matches!(result, Err(FormatError::Decode { .. })));
}

#[test]
fn test_empty_input_is_decode_error() {
    let result = MarkupFormat::default().parse("");
    assert!(matches!(result, Err(FormatError::Decode { .. })));
}

#[test]
fn test_multiple_roots_is_decode_error() {
    let result = MarkupFormat::default().parse("<a>1</a><b>2</b>");
    assert!(matches!(result, Err(FormatError::Decode { .. })));
}
