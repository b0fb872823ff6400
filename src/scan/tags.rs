//! Tag name discovery
//!
//! One shared pattern finds every tag-like token in the scoped text and
//! yields the distinct names in first-seen order. Discovery is not
//! comment-aware; comment suppression is applied later, when spans are
//! computed, so a tag that only appears inside comments still gets a
//! color but no highlights.

use fancy_regex::Regex;

use crate::error::Result;

/// Tag-name-like token: `<`, optional `/`, a name, then either end of
/// line or attribute content that does not end just before a dangling
/// `=` (and whose last character keeps `-->`, `?>` and `%>` closers
/// out), then `>`. The name is the first capture group.
const TAG_PATTERN: &str = r"(?m)<(?:/|)([a-zA-Z][a-zA-Z0-9.-]*)(?:$|(?:| (?:.*?)[^-?%$])(?<!=)>)";

/// Collect the distinct tag names in the scoped text, first-seen order.
pub fn collect_tag_names(scoped: &str) -> Result<Vec<String>> {
    if scoped.is_empty() {
        return Ok(Vec::new());
    }
    let regex = Regex::new(TAG_PATTERN)?;
    let mut names: Vec<String> = Vec::new();
    for caps in regex.captures_iter(scoped) {
        let caps = caps?;
        let Some(name) = caps.get(1) else { continue };
        if !names.iter().any(|seen| seen == name.as_str()) {
            names.push(name.as_str().to_string());
        }
    }
    Ok(names)
}
