use crate::render::html::escape_html;

/// Code span inline type with owned delimiter constant.
///
/// Code span content is the only inline content that gets HTML-escaped.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that both opens and closes a code span.
    pub const TICK: &'static str = "`";

    /// Renders the content between the ticks. `escape` is false when the
    /// whole line was already escaped.
    pub fn to_html(inner: &str, escape: bool) -> String {
        if escape {
            format!("<code>{}</code>", escape_html(inner))
        } else {
            format!("<code>{inner}</code>")
        }
    }
}
