/// Blockquote syntax: every line carries a leading `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and at most one following space.
    pub fn strip_prefix(line: &str) -> &str {
        let rest = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), "hello");
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_level() {
        assert_eq!(BlockQuote::strip_prefix(">> nested"), "> nested");
    }

    #[test]
    fn quote_line_detection() {
        assert!(BlockQuote::is_quote_line(">"));
        assert!(!BlockQuote::is_quote_line(" > indented"));
    }
}
