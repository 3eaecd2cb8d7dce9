/// Unordered list item syntax: `* item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "* ";

    /// The item text if `line` is an unordered list item.
    pub fn item(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Ordered list item syntax: `<digits>. item`.
///
/// Numbers are not checked for order or continuity.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The item text if `line` is an ordered list item.
    pub fn item(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix(Self::SEPARATOR)
    }
}
