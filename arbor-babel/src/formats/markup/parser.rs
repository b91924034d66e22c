use crate::error::FormatError;
use crate::tree::{Mapping, Tree};
use roxmltree::Node;

/// Deepest element nesting accepted, the same bound `serde_json` puts on JSON.
pub const MAX_DEPTH: usize = 128;

/// Parse an XML document into a tree.
///
/// The document element is the synthetic root: its tag is dropped and its content becomes
/// the returned tree. Documents nested deeper than [`MAX_DEPTH`] are rejected before
/// `roxmltree` sees them, since both its parser and the tree walk recurse per level.
pub fn parse_markup(source: &str) -> Result<Tree, FormatError> {
    check_depth(source)?;

    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::decode(super::NAME, format!("XML parsing error: {e}")))?;

    Ok(decode_element(doc.root_element()))
}

/// Leaves become scalars; branching elements become mappings keyed by child tag, with
/// repeated tags folded into sequences.
fn decode_element(node: Node) -> Tree {
    let mut children = node.children().filter(|child| child.is_element()).peekable();
    if children.peek().is_none() {
        return Tree::Scalar(text_content(node));
    }

    let mut mapping = Mapping::new();
    for child in children {
        mapping.insert_folding(child.tag_name().name(), decode_element(child));
    }
    Tree::Mapping(mapping)
}

/// Track element depth over the raw markup. Only tag boundaries matter here: comments,
/// CDATA sections, processing instructions and declarations are skipped whole, and quoted
/// attribute values may contain `>`. Malformed input is left for `roxmltree` to report.
fn check_depth(source: &str) -> Result<(), FormatError> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'<') {
        let start = i + offset;
        let rest = &source[start..];

        i = if rest.starts_with("<!--") {
            skip_past(source, start, "-->")
        } else if rest.starts_with("<![CDATA[") {
            skip_past(source, start, "]]>")
        } else if rest.starts_with("<?") {
            skip_past(source, start, "?>")
        } else if rest.starts_with("</") {
            depth = depth.saturating_sub(1);
            skip_past(source, start, ">")
        } else if rest.starts_with("<!") {
            skip_past(source, start, ">")
        } else {
            let (end, self_closing) = scan_start_tag(bytes, start + 1);
            if !self_closing {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(FormatError::decode(
                        super::NAME,
                        format!("XML parsing error: nesting deeper than {MAX_DEPTH} elements"),
                    ));
                }
            }
            end
        };
    }
    Ok(())
}

/// Index just past the first `terminator` after `from`, or the end of the input.
fn skip_past(source: &str, from: usize, terminator: &str) -> usize {
    source[from..]
        .find(terminator)
        .map_or(source.len(), |pos| from + pos + terminator.len())
}

/// Scan a start tag whose name begins at `from`; returns the index past its `>` and whether
/// it closed with `/>`.
fn scan_start_tag(bytes: &[u8], from: usize) -> (usize, bool) {
    let mut quote = None;
    let mut i = from;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return (i + 1, i > from && bytes[i - 1] == b'/'),
            None => {}
        }
        i += 1;
    }
    (bytes.len(), false)
}

fn text_content(node: Node) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
