use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block rendering: each line is classified on its own,
/// without reference to the fence or list state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Starts with the code fence marker.
    Fence,
    /// `# `, `## ` or `### ` with the text after the marker.
    Heading { level: u8, text: &'a str },
    /// `- ` with the text after the marker.
    ListItem(&'a str),
    /// `>` with the text after it.
    BlockQuote(&'a str),
    /// Starts with `---`.
    ThematicBreak,
    /// Any other non-blank line, in full.
    Paragraph(&'a str),
    /// Empty or whitespace only.
    Blank,
}

/// Classifies individual lines for the block rendering phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`]. The first matching rule wins:
    /// fence, heading, list item, blockquote, rule, paragraph, blank.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if CodeFence::is_fence(line) {
            return LineClass::Fence;
        }
        if let Some((level, text)) = Heading::strip(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = ListItem::strip(line) {
            return LineClass::ListItem(text);
        }
        if let Some(text) = BlockQuote::strip(line) {
            return LineClass::BlockQuote(text);
        }
        if ThematicBreak::is_break(line) {
            return LineClass::ThematicBreak;
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        LineClass::Paragraph(line)
    }
}

/// Splits a document into lines on `\n`, dropping one trailing `\r` per line.
///
/// Follows `str::split`, so empty input is a single empty line and a
/// trailing newline produces a final empty line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
