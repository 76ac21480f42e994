/// Link inline type: `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";

    pub fn to_html(text: &str, url: &str) -> String {
        format!(r#"<a href="{url}">{text}</a>"#)
    }
}
