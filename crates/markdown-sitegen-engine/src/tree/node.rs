use indexmap::IndexMap;

/// Attribute name to value, kept in insertion order so output is deterministic.
pub type Attributes = IndexMap<String, String>;

/// A node of the output document tree.
///
/// The tree is a plain forest: every node owns its children and nothing is
/// shared or back-referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// A tagged container with zero or more children.
    Element(Element),
    /// A leaf carrying text, optionally wrapped in a tag.
    Text(TextNode),
}

/// Container node, e.g. `p`, `ul`, `blockquote`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Always set by the block builder; `None` only fails serialization.
    pub tag: Option<String>,
    pub children: Vec<DocumentNode>,
    pub attributes: Attributes,
}

/// Leaf node. With no tag the value is emitted as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextNode {
    pub tag: Option<String>,
    /// Always set by the block builder; `None` only fails serialization.
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl DocumentNode {
    /// Creates an element with the given tag and children.
    pub fn element(tag: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        DocumentNode::Element(Element {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Creates an untagged text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        DocumentNode::Text(TextNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Creates a text leaf wrapped in `tag`.
    pub fn tagged_text(tag: impl Into<String>, value: impl Into<String>) -> Self {
        DocumentNode::Text(TextNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Returns the node with `name="value"` appended to its attributes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let attributes = match &mut self {
            DocumentNode::Element(el) => &mut el.attributes,
            DocumentNode::Text(t) => &mut t.attributes,
        };
        attributes.insert(name.into(), value.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            DocumentNode::Element(el) => el.tag.as_deref(),
            DocumentNode::Text(t) => t.tag.as_deref(),
        }
    }

    /// Children of an element; text leaves have none.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            DocumentNode::Element(el) => &el.children,
            DocumentNode::Text(_) => &[],
        }
    }
}
