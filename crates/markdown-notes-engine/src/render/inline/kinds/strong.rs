/// Bold inline type. Both delimiter spellings render as `<strong>`.
pub struct Strong;

impl Strong {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";

    pub fn to_html(inner: &str) -> String {
        format!("<strong>{inner}</strong>")
    }
}
