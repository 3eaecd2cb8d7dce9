use crate::parsing::inline::types::InlineSpan;

/// A symmetric inline delimiter such as `**` and the span kind it marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub token: &'static str,
    kind: Marked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marked {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        token: "**",
        kind: Marked::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        token: "*",
        kind: Marked::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        token: "`",
        kind: Marked::Code,
    };

    /// Tokenizer order. `**` must run before `*`, which is a substring of it.
    pub const ORDER: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];

    /// Wraps the text found between a pair of this delimiter.
    pub fn mark(&self, inner: &str) -> InlineSpan {
        let inner = inner.to_string();
        match self.kind {
            Marked::Bold => InlineSpan::Bold(inner),
            Marked::Italic => InlineSpan::Italic(inner),
            Marked::Code => InlineSpan::Code(inner),
        }
    }
}
