/// A forward-only byte cursor over an immutable string.
///
/// Only ASCII bytes are ever matched, so every position the cursor stops at
/// after a successful match is a valid char boundary for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// True once every byte has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The byte at the current position, without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte just before the current position, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// True when the remaining input begins with `pat`.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Consumes and returns one byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Skips `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances to the next occurrence of `stop` and returns the text skipped.
    ///
    /// The cursor is left on `stop`. Returns `None` and leaves the cursor
    /// untouched when `stop` does not occur in the rest of the input.
    pub fn take_until(&mut self, stop: u8) -> Option<&'a str> {
        let rest = self.s.as_bytes().get(self.i..)?;
        let offset = rest.iter().position(|&b| b == stop)?;
        let start = self.i;
        self.i += offset;
        Some(&self.s[start..self.i])
    }

    /// Text between two byte positions of the underlying string.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
