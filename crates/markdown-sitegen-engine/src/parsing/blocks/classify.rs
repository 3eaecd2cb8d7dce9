use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{BlockKind, RawBlock},
};

/// Assigns a [`BlockKind`] to each raw block.
///
/// Rules are checked in order and the first match wins: heading, code,
/// quote, unordered list, ordered list, paragraph. Matching is done by
/// scanning the leading token of each line.
pub struct BlockClassifier;

impl BlockClassifier {
    pub fn classify(&self, block: &RawBlock<'_>) -> BlockKind {
        let text = block.as_str();

        if let Some(level) = Heading::level(text) {
            return BlockKind::Heading(level);
        }
        if CodeFence::is_fenced(text) {
            return BlockKind::Code;
        }
        if block.all_lines(BlockQuote::is_quote_line) {
            return BlockKind::Quote;
        }
        if block.all_lines(|l| UnorderedList::item(l).is_some()) {
            return BlockKind::UnorderedList;
        }
        if block.all_lines(|l| OrderedList::item(l).is_some()) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}

/// Classifies a single block of markdown text.
pub fn classify(block: &str) -> BlockKind {
    BlockClassifier.classify(&RawBlock::from(block))
}
