//! HTML escaping and the fixed page shell around a rendered fragment.

/// Opening half of the preview page, up to and including `<body>`.
pub const SHELL_HEAD: &str = r#"<html>
<head>
<style>
body { font-family: Arial, sans-serif; margin: 20px; }
code { background-color: #f0f0f0; padding: 2px 4px; border-radius: 4px; }
pre { background-color: #f0f0f0; padding: 10px; border-radius: 4px; }
blockquote { border-left: 4px solid #ccc; margin-left: 0; padding-left: 16px; }
</style>
</head>
<body>
"#;

/// Closing half of the preview page.
pub const SHELL_TAIL: &str = "\n</body>\n</html>\n";

/// Escapes the five HTML-significant characters.
///
/// Returns the input unchanged (apart from the allocation) when none of
/// `& < > " '` occur.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wraps a rendered fragment in the static page template.
pub fn wrap_in_shell(fragment: &str) -> String {
    let mut page = String::with_capacity(SHELL_HEAD.len() + fragment.len() + SHELL_TAIL.len());
    page.push_str(SHELL_HEAD);
    page.push_str(fragment);
    page.push_str(SHELL_TAIL);
    page
}
