/// Blockquote block type with owned delimiter constant.
///
/// Only a single leading `>` is recognised. The space after it, if any, is
/// kept as part of the quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips exactly one `>` prefix.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }

    pub fn to_html(inner: &str) -> String {
        format!("<blockquote>{inner}</blockquote>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip("hello"), None);
        assert_eq!(BlockQuote::strip(" > hello"), None);
    }

    #[test]
    fn strip_single_quote_keeps_space() {
        assert_eq!(BlockQuote::strip("> hello"), Some(" hello"));
        assert_eq!(BlockQuote::strip(">hello"), Some("hello"));
    }

    #[test]
    fn strip_nested_quote_removes_one_level() {
        assert_eq!(BlockQuote::strip(">> hello"), Some("> hello"));
    }
}
