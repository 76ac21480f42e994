/// Unordered list item. Consecutive items share one `<ul>`.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";
    pub const LIST_OPEN: &'static str = "<ul>";
    pub const LIST_CLOSE: &'static str = "</ul>";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }

    pub fn to_html(inner: &str) -> String {
        format!("<li>{inner}</li>")
    }
}
