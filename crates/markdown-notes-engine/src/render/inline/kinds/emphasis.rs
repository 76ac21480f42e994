/// Italic inline type. Both delimiter spellings render as `<em>`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";

    pub fn to_html(inner: &str) -> String {
        format!("<em>{inner}</em>")
    }
}
