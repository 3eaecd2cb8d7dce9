use crate::error::ConversionError;

use super::node::{Attributes, DocumentNode, Element, TextNode};

/// Renders a document tree to its markup string.
///
/// Attribute values are written verbatim; no escaping is applied to values
/// or text.
pub fn serialize(node: &DocumentNode) -> Result<String, ConversionError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

impl DocumentNode {
    /// Shorthand for [`serialize`].
    pub fn to_html(&self) -> Result<String, ConversionError> {
        serialize(self)
    }
}

fn write_node(node: &DocumentNode, out: &mut String) -> Result<(), ConversionError> {
    match node {
        DocumentNode::Element(el) => write_element(el, out),
        DocumentNode::Text(t) => write_text(t, out),
    }
}

fn write_element(el: &Element, out: &mut String) -> Result<(), ConversionError> {
    let tag = el.tag.as_deref().ok_or(ConversionError::MissingTag)?;
    open_tag(tag, &el.attributes, out);
    for child in &el.children {
        write_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn write_text(t: &TextNode, out: &mut String) -> Result<(), ConversionError> {
    let value = t.value.as_deref().ok_or(ConversionError::MissingValue)?;
    match t.tag.as_deref() {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, &t.attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
