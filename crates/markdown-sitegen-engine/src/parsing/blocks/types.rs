/// The structural kind of one markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other rule matches, including the empty block.
    Paragraph,
    /// `# ` to `###### `, carrying the level (1..=6).
    Heading(u8),
    /// A block fenced by ```` ``` ```` at both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* `.
    UnorderedList,
    /// Every line starts with `<digits>. `.
    OrderedList,
}

/// One blank-line-delimited unit of a document, trimmed of surrounding
/// whitespace.
///
/// Borrows from the source document; may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    text: &'a str,
}

impl<'a> RawBlock<'a> {
    /// Wraps `text`, trimming leading and trailing whitespace.
    pub fn new(text: &'a str) -> Self {
        Self { text: text.trim() }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Lines of the block, without line terminators.
    pub fn lines(&self) -> std::str::Lines<'a> {
        self.text.lines()
    }

    /// True when the block has at least one line and every line satisfies `pred`.
    pub fn all_lines(&self, pred: impl Fn(&str) -> bool) -> bool {
        !self.is_empty() && self.lines().all(pred)
    }
}

impl<'a> From<&'a str> for RawBlock<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}
