/// Fenced code block syntax.
///
/// A code block opens and closes with ```` ``` ````; its body is raw text
/// and is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True when `block` starts and ends with two distinct fences.
    pub fn is_fenced(block: &str) -> bool {
        Self::body(block).is_some()
    }

    /// The text between the fences, trimmed.
    ///
    /// Returns `None` unless both fences are present and do not overlap.
    pub fn body(block: &str) -> Option<&str> {
        if block.len() < 2 * Self::FENCE.len() {
            return None;
        }
        block
            .strip_prefix(Self::FENCE)?
            .strip_suffix(Self::FENCE)
            .map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fenced_block() {
        assert!(CodeFence::is_fenced("```\ncode\n```"));
    }

    #[test]
    fn single_fence_is_not_a_block() {
        assert!(!CodeFence::is_fenced("```"));
        assert!(!CodeFence::is_fenced("`````"));
        assert!(!CodeFence::is_fenced("```\nno close"));
    }

    #[test]
    fn body_is_trimmed() {
        assert_eq!(CodeFence::body("```\n  let x = 1;\n```"), Some("let x = 1;"));
    }

    #[test]
    fn empty_body() {
        assert_eq!(CodeFence::body("``````"), Some(""));
    }

    #[test]
    fn body_keeps_inner_markup() {
        assert_eq!(CodeFence::body("```\n**not bold**\n```"), Some("**not bold**"));
    }
}
