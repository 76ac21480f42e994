/// Paragraph block type.
///
/// Paragraphs have no delimiters: every non-blank line that no other block
/// claims becomes its own paragraph. Lines are never joined.
pub struct Paragraph;

impl Paragraph {
    /// Emitted for each blank line.
    pub const BREAK_HTML: &'static str = "<br>";

    pub fn to_html(inner: &str) -> String {
        format!("<p>{inner}</p>")
    }
}
