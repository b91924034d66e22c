use crate::error::FormatError;
use crate::tree::Tree;
use std::collections::HashMap;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Rendering knobs for XML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Tag of the synthetic root element
    pub root_tag: String,

    /// Indentation unit, repeated once per nesting level
    pub indent: String,

    /// Whether to emit the `<?xml ...?>` declaration
    pub declaration: bool,

    /// Child tag used when the whole document is a sequence
    pub sequence_tag: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            root_tag: "root".to_string(),
            indent: "  ".to_string(),
            declaration: true,
            sequence_tag: "item".to_string(),
        }
    }
}

impl MarkupOptions {
    /// Layer serializer parameters (`root-tag`, `indent`, `declaration`, `sequence-tag`)
    /// over these options. Unknown keys are rejected.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        for (key, value) in params {
            match key.as_str() {
                "root-tag" => self.root_tag = value.clone(),
                "indent" => self.indent = value.clone(),
                "declaration" => self.declaration = parse_bool("declaration", value)?,
                "sequence-tag" => self.sequence_tag = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'markup' does not support option '{other}'"
                    )))
                }
            }
        }
        Ok(self)
    }
}

fn parse_bool(option: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::NotSupported(format!(
            "Invalid boolean value '{other}' for option '{option}'"
        ))),
    }
}

/// Serialize a tree as a pretty-printed XML document.
///
/// Scalars and mappings become the root element itself. A top-level sequence has no single
/// element to live in, so its items are wrapped in the root as `sequence_tag` children.
pub fn serialize_markup(tree: &Tree, options: &MarkupOptions) -> Result<String, FormatError> {
    let mut writer = MarkupWriter::new(options);
    if options.declaration {
        writer.output.push_str(DECLARATION);
        writer.output.push('\n');
    }

    match tree {
        Tree::Sequence(items) => {
            check_name(&options.root_tag)?;
            check_name(&options.sequence_tag)?;
            if items.is_empty() {
                writer.empty(&options.root_tag, 0);
            } else {
                writer.open(&options.root_tag, 0);
                writer.write_element(&options.sequence_tag, tree, 1)?;
                writer.close(&options.root_tag, 0);
            }
        }
        _ => writer.write_element(&options.root_tag, tree, 0)?,
    }

    Ok(writer.output)
}

struct MarkupWriter<'a> {
    options: &'a MarkupOptions,
    output: String,
}

impl<'a> MarkupWriter<'a> {
    fn new(options: &'a MarkupOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    /// Write `tree` under `tag`. A sequence has no element of its own: each item is written
    /// as a sibling sharing `tag`, which is the inverse of repeated-tag folding on decode.
    fn write_element(&mut self, tag: &str, tree: &Tree, depth: usize) -> Result<(), FormatError> {
        match tree {
            Tree::Scalar(text) => {
                check_name(tag)?;
                if text.is_empty() {
                    self.empty(tag, depth);
                } else {
                    let escaped = escape_text(text)?;
                    self.indent(depth);
                    self.output
                        .push_str(&format!("<{tag}>{escaped}</{tag}>\n"));
                }
            }
            Tree::Sequence(items) => {
                for item in items {
                    self.write_element(tag, item, depth)?;
                }
            }
            Tree::Mapping(mapping) => {
                check_name(tag)?;
                if mapping.is_empty() {
                    self.empty(tag, depth);
                } else {
                    self.open(tag, depth);
                    for (key, value) in mapping.iter() {
                        self.write_element(key, value, depth + 1)?;
                    }
                    self.close(tag, depth);
                }
            }
        }
        Ok(())
    }

    fn open(&mut self, tag: &str, depth: usize) {
        self.indent(depth);
        self.output.push_str(&format!("<{tag}>\n"));
    }

    fn close(&mut self, tag: &str, depth: usize) {
        self.indent(depth);
        self.output.push_str(&format!("</{tag}>\n"));
    }

    fn empty(&mut self, tag: &str, depth: usize) {
        self.indent(depth);
        self.output.push_str(&format!("<{tag}/>\n"));
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.options.indent);
        }
    }
}

/// Keys become tag names, so they must be XML 1.0 names (5th edition, production 5). The
/// colon is refused as well, since nothing declares a namespace for the prefix.
fn check_name(name: &str) -> Result<(), FormatError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FormatError::encode(
            super::NAME,
            format!("'{name}' is not a valid element name"),
        ))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

fn escape_text(text: &str) -> Result<String, FormatError> {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            // Parsers normalize a literal CR away; the reference survives.
            '\r' => escaped.push_str("&#xD;"),
            '\t' | '\n' => escaped.push(c),
            c if is_xml_char(c) => escaped.push(c),
            c => {
                return Err(FormatError::encode(
                    super::NAME,
                    format!("character U+{:04X} cannot appear in XML text", c as u32),
                ))
            }
        }
    }
    Ok(escaped)
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
