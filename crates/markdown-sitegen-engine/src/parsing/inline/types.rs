use crate::tree::DocumentNode;

/// One contiguous run of a single inline formatting kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `` `code` ``. Content is taken verbatim.
    Code(String),
    /// `[text](target)`
    Link { text: String, target: String },
    /// `![alt](target)`
    Image { alt: String, target: String },
}

impl InlineSpan {
    /// Maps the span to its leaf node in the document tree.
    pub fn into_node(self) -> DocumentNode {
        match self {
            InlineSpan::Text(s) => DocumentNode::text(s),
            InlineSpan::Bold(s) => DocumentNode::tagged_text("b", s),
            InlineSpan::Italic(s) => DocumentNode::tagged_text("i", s),
            InlineSpan::Code(s) => DocumentNode::tagged_text("code", s),
            InlineSpan::Link { text, target } => {
                DocumentNode::tagged_text("a", text).with_attribute("href", target)
            }
            InlineSpan::Image { alt, target } => DocumentNode::tagged_text("img", "")
                .with_attribute("src", target)
                .with_attribute("alt", alt),
        }
    }
}
