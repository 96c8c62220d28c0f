use std::sync::OnceLock;

use regex::Regex;

// Matches the label with any surrounding markdown emphasis and the colon,
// e.g. `**Ansvarig säljare:**` or `_Ansvarig säljare_ :`.
fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)[*_]*\s*ansvarig\s+säljare\s*[*_]*\s*:?\s*[*_]*")
            .expect("valid seller regex")
    })
}

/// Responsible seller written in a card description.
///
/// Only the first line carrying the label is considered.
pub fn responsible_seller(desc: &str) -> Option<String> {
    let re = label_regex();
    let (line, m) = desc
        .lines()
        .find_map(|line| re.find(line).map(|m| (line, m)))?;
    let value = line[m.end()..]
        .trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .to_string();
    (!value.is_empty()).then_some(value)
}
