use crate::error::ConversionError;

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Reference},
    types::InlineSpan,
};

/// Tokenizes inline markdown into a sequence of [`InlineSpan`]s.
///
/// Stages run in a fixed order, each re-splitting only the plain text left
/// by the previous one: bold, italic, code, images, links. Text inside an
/// already extracted span is never looked at again, so delimiters do not
/// nest.
///
/// Empty plain text is never emitted; `tokenize("")` yields no spans.
///
/// # Errors
/// [`ConversionError::UnclosedDelimiter`] when a text span holds an odd
/// number of `**`, `*` or `` ` `` delimiters.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>, ConversionError> {
    let mut spans = vec![InlineSpan::Text(text.to_string())];
    for delimiter in Delimiter::ORDER {
        spans = split_delimited(spans, delimiter)?;
    }
    spans = split_references(spans, Reference::Image);
    spans = split_references(spans, Reference::Link);
    Ok(spans)
}

/// Splits every text span on `delimiter`, pairing delimiters left to right.
///
/// Odd-numbered pieces sit between a pair and become marked spans. Marked
/// spans are kept even when empty; empty plain pieces are dropped.
fn split_delimited(
    spans: Vec<InlineSpan>,
    delimiter: Delimiter,
) -> Result<Vec<InlineSpan>, ConversionError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };

        match text.matches(delimiter.token).count() {
            0 => {
                push_text(&mut out, &text);
                continue;
            }
            n if n % 2 == 1 => {
                return Err(ConversionError::UnclosedDelimiter {
                    delimiter: delimiter.token,
                    text,
                });
            }
            _ => {}
        }

        for (i, piece) in text.split(delimiter.token).enumerate() {
            if i % 2 == 1 {
                out.push(delimiter.mark(piece));
            } else {
                push_text(&mut out, piece);
            }
        }
    }

    Ok(out)
}

/// Extracts `reference` constructs from every text span.
fn split_references(spans: Vec<InlineSpan>, reference: Reference) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            InlineSpan::Text(text) => scan_references(&text, reference, &mut out),
            other => out.push(other),
        }
    }
    out
}

/// Single forward pass over `s`, emitting the leftmost match at each step.
fn scan_references(s: &str, reference: Reference, out: &mut Vec<InlineSpan>) {
    let mut cur = Cursor::new(s);
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse_reference(&mut cur, reference) {
            push_text(out, cur.slice(text_start, start));
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_text(out, cur.slice(text_start, s.len()));
}

/// Attempts to parse `reference` at the current position.
///
/// On failure the cursor is restored. A link opener directly after `!` is
/// never a link.
fn try_parse_reference(cur: &mut Cursor<'_>, reference: Reference) -> Option<InlineSpan> {
    if !cur.starts_with(reference.opener()) {
        return None;
    }
    if reference == Reference::Link && cur.prev() == Some(Reference::IMAGE_BANG) {
        return None;
    }

    let saved = cur.clone();
    let parsed = parse_reference_body(cur, reference);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn parse_reference_body(cur: &mut Cursor<'_>, reference: Reference) -> Option<InlineSpan> {
    cur.bump_n(reference.opener().len());
    let label = cur.take_until(Reference::LABEL_CLOSE)?;
    cur.bump(); // ]
    if cur.bump() != Some(Reference::TARGET_OPEN) {
        return None;
    }
    let target = cur.take_until(Reference::TARGET_CLOSE)?;
    cur.bump(); // )
    Some(reference.span(label, target))
}

fn push_text(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::Text(text.to_string()));
    }
}
