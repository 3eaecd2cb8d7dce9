pub mod blocks;
pub mod inline;

use std::borrow::Cow;

use crate::{error::ConversionError, tree::DocumentNode};

use blocks::{BlockBuilder, BlockClassifier, BlockKind, RawBlock, kinds::Heading};

/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Rewrites `\r\n` line endings to `\n`; borrows when there are none.
pub fn normalize_line_endings(markdown: &str) -> Cow<'_, str> {
    if markdown.contains("\r\n") {
        Cow::Owned(markdown.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(markdown)
    }
}

/// Splits a document into trimmed blocks, in document order.
///
/// Blocks that are empty after trimming are kept; they become empty
/// paragraphs downstream.
pub fn split_blocks(markdown: &str) -> Vec<RawBlock<'_>> {
    markdown.split(BLOCK_SEPARATOR).map(RawBlock::new).collect()
}

/// Converts a whole markdown document into a tree rooted at a `div`.
///
/// # Errors
/// The first [`ConversionError`] raised by any block; no partial tree is
/// returned.
pub fn convert_document(markdown: &str) -> Result<DocumentNode, ConversionError> {
    let markdown = normalize_line_endings(markdown);
    let classifier = BlockClassifier;
    let mut builder = BlockBuilder::new();

    for block in split_blocks(&markdown) {
        let kind = classifier.classify(&block);
        builder.push(&block, kind)?;
    }

    Ok(builder.finish())
}

/// Returns the trimmed text of the first level-1 heading.
///
/// # Errors
/// [`ConversionError::MissingTitle`] when the document has no level-1 heading.
pub fn extract_title(markdown: &str) -> Result<String, ConversionError> {
    let markdown = normalize_line_endings(markdown);
    let classifier = BlockClassifier;
    split_blocks(&markdown)
        .into_iter()
        .find(|block| classifier.classify(block) == BlockKind::Heading(1))
        .map(|block| Heading::content(block.as_str()).trim().to_string())
        .ok_or(ConversionError::MissingTitle)
}
