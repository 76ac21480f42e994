/// Markup the toolbar inserts at the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    Bold,
    Italic,
    Code,
    Link,
    List,
    Header,
}

impl Snippet {
    /// Toolbar order.
    pub const ALL: [Snippet; 6] = [
        Snippet::Bold,
        Snippet::Italic,
        Snippet::Code,
        Snippet::Link,
        Snippet::List,
        Snippet::Header,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Snippet::Bold => "Bold",
            Snippet::Italic => "Italic",
            Snippet::Code => "Code",
            Snippet::Link => "Link",
            Snippet::List => "List",
            Snippet::Header => "Header",
        }
    }

    pub fn markup(self) -> &'static str {
        match self {
            Snippet::Bold => "**Bold**",
            Snippet::Italic => "*Italic*",
            Snippet::Code => "`Code`",
            Snippet::Link => "[Link](url)",
            Snippet::List => "- List item",
            Snippet::Header => "# Header",
        }
    }

    /// Looks up a snippet by its label, ignoring case.
    pub fn from_label(label: &str) -> Option<Snippet> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

/// Inserts `snippet` at `caret` and returns the new text and caret.
///
/// `caret` counts characters, not bytes, and is clamped to the end of the
/// text. The returned caret sits just after the inserted markup.
pub fn insert_snippet(text: &str, caret: usize, snippet: Snippet) -> (String, usize) {
    let markup = snippet.markup();
    let byte_at = text
        .char_indices()
        .nth(caret)
        .map_or(text.len(), |(i, _)| i);
    let caret = text[..byte_at].chars().count();

    let mut out = String::with_capacity(text.len() + markup.len());
    out.push_str(&text[..byte_at]);
    out.push_str(markup);
    out.push_str(&text[byte_at..]);
    (out, caret + markup.chars().count())
}
