use crate::{
    error::ConversionError,
    parsing::inline::{InlineSpan, tokenize},
    tree::DocumentNode,
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{BlockKind, RawBlock},
};

/// Collects built blocks in document order and wraps them in the root element.
pub struct BlockBuilder {
    out: Vec<DocumentNode>,
}

impl BlockBuilder {
    /// Tag of the document body container. Any `body`/`html` wrapper belongs
    /// to the page template.
    pub const ROOT_TAG: &'static str = "div";

    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, block: &RawBlock<'_>, kind: BlockKind) -> Result<(), ConversionError> {
        self.out.push(build(block, kind)?);
        Ok(())
    }

    pub fn finish(self) -> DocumentNode {
        DocumentNode::element(Self::ROOT_TAG, self.out)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts one classified block into its document node.
///
/// # Errors
/// Tokenizer errors from the block's text, or
/// [`ConversionError::UnterminatedCodeFence`] for a code block without
/// both fences.
pub fn build(block: &RawBlock<'_>, kind: BlockKind) -> Result<DocumentNode, ConversionError> {
    let text = block.as_str();
    match kind {
        BlockKind::Paragraph => Ok(DocumentNode::element("p", inline_nodes(text)?)),
        BlockKind::Heading(level) => Ok(DocumentNode::element(
            format!("h{level}"),
            inline_nodes(Heading::content(text))?,
        )),
        BlockKind::Code => build_code(text),
        BlockKind::Quote => {
            // Lines collapse into one run; line breaks are not kept.
            let joined = block
                .lines()
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join(" ");
            Ok(DocumentNode::element("blockquote", inline_nodes(&joined)?))
        }
        BlockKind::UnorderedList => build_list("ul", block, UnorderedList::item),
        BlockKind::OrderedList => build_list("ol", block, OrderedList::item),
    }
}

fn build_code(text: &str) -> Result<DocumentNode, ConversionError> {
    let body = CodeFence::body(text).ok_or_else(|| ConversionError::UnterminatedCodeFence {
        block: text.to_string(),
    })?;
    Ok(DocumentNode::element(
        "pre",
        vec![DocumentNode::element("code", vec![DocumentNode::text(body)])],
    ))
}

/// One `li` per line, each tokenized on its own.
fn build_list(
    tag: &str,
    block: &RawBlock<'_>,
    item: fn(&str) -> Option<&str>,
) -> Result<DocumentNode, ConversionError> {
    let items = block
        .lines()
        .map(|line| -> Result<DocumentNode, ConversionError> {
            let content = item(line).unwrap_or(line);
            Ok(DocumentNode::element("li", inline_nodes(content)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DocumentNode::element(tag, items))
}

fn inline_nodes(text: &str) -> Result<Vec<DocumentNode>, ConversionError> {
    Ok(tokenize(text)?
        .into_iter()
        .map(InlineSpan::into_node)
        .collect())
}
