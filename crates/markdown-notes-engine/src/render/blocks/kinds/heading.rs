/// ATX heading, levels 1 to 3 only.
pub struct Heading;

impl Heading {
    /// Heading markers with their level, tested in this order.
    pub const MARKERS: [(&'static str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

    /// Returns the level and the text after the marker and its space.
    ///
    /// `#### x` and deeper are not headings.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (*level, rest)))
    }

    pub fn to_html(level: u8, inner: &str) -> String {
        format!("<h{level}>{inner}</h{level}>")
    }
}
