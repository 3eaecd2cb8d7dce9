use thiserror::Error;

/// Fatal conditions raised while turning markdown into a document tree.
///
/// Every variant aborts the conversion of the whole document; there is no
/// partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// An inline delimiter occurs an odd number of times within one text span.
    #[error("Unclosed `{delimiter}` delimiter in \"{text}\"")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A block handed to the code builder lacks an opening or closing fence.
    #[error("Code block is missing a fence: \"{block}\"")]
    UnterminatedCodeFence { block: String },

    /// An element node without a tag reached serialization.
    #[error("Element node must have a tag")]
    MissingTag,

    /// A text node without a value reached serialization.
    #[error("Text node must have a value")]
    MissingValue,

    /// The document contains no level-1 heading.
    #[error("Markdown contains no level-1 heading")]
    MissingTitle,
}
