/// ATX heading syntax: `#` to `######`, a space, then the heading text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level when `block` opens a heading.
    ///
    /// Requires 1 to 6 markers, exactly one space, then a non-whitespace
    /// character. Seven markers never match.
    pub fn level(block: &str) -> Option<u8> {
        let markers = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&markers) {
            return None;
        }
        let rest = block[markers..].strip_prefix(' ')?;
        rest.chars().next().filter(|c| !c.is_whitespace())?;
        u8::try_from(markers).ok()
    }

    /// The heading text with the marker run and following whitespace removed.
    pub fn content(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim_start()
    }
}
