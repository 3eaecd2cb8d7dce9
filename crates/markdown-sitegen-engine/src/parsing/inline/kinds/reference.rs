use crate::parsing::inline::types::InlineSpan;

/// Bracketed inline references: `![alt](target)` and `[text](target)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Image,
    Link,
}

impl Reference {
    pub const IMAGE_BANG: u8 = b'!';
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';

    /// Bytes that introduce this reference.
    pub fn opener(&self) -> &'static [u8] {
        match self {
            Reference::Image => b"![",
            Reference::Link => b"[",
        }
    }

    pub fn span(&self, label: &str, target: &str) -> InlineSpan {
        match self {
            Reference::Image => InlineSpan::Image {
                alt: label.to_string(),
                target: target.to_string(),
            },
            Reference::Link => InlineSpan::Link {
                text: label.to_string(),
                target: target.to_string(),
            },
        }
    }
}
