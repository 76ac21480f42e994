/// A forward-only cursor over one line of inline text.
///
/// Positions are byte indices into `s`. Every position the scanners move to
/// sits on an ASCII delimiter boundary, so slicing at them is always valid.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if nothing remains after the cursor.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed tail of the text.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Finds the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.find_from(self.i, pat)
    }

    /// Finds the next occurrence of `pat` at or after byte index `from`.
    pub fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|offset| from + offset)
    }

    /// Returns the text between two byte indices.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }

    /// Moves the cursor to byte index `i`.
    pub fn bump_to(&mut self, i: usize) {
        self.i = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert!(!cur.eof());
        assert_eq!(cur.rest(), "hello");
        cur.bump_to(2);
        assert_eq!(cur.rest(), "llo");
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.find("*"), None);
    }

    #[test]
    fn find_is_relative_to_cursor() {
        let mut cur = Cursor::new("*a* *b*");
        assert_eq!(cur.find("*"), Some(0));
        cur.bump_to(3);
        assert_eq!(cur.find("*"), Some(4));
    }

    #[test]
    fn find_from_allows_overlap_with_marker() {
        let cur = Cursor::new("***a**");
        assert_eq!(cur.find_from(2, "**"), Some(4));
    }

    #[test]
    fn find_from_past_end_returns_none() {
        let cur = Cursor::new("ab");
        assert_eq!(cur.find_from(2, "a"), None);
        assert_eq!(cur.find_from(10, "a"), None);
    }

    #[test]
    fn bump_to_end_is_eof() {
        let mut cur = Cursor::new("abc");
        cur.bump_to(3);
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
    }
}
