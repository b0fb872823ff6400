//! Comment marker rules per language
//!
//! Matches inside comments must not be highlighted, so every scan
//! carries the comment start/end markers for the document's language.
//! A rule may supply a regex pattern form alongside the literal; the
//! pattern form exists for markers that are not regex-safe (JSX `{/*`)
//! and takes precedence when building scan expressions. Matched comment
//! tokens are always compared against the literal forms.

/// Comment start/end markers for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRule {
    /// Literal comment-start marker
    pub start: &'static str,
    /// Literal comment-end marker
    pub end: &'static str,
    /// Regex form of the start marker, if the literal is not regex-safe
    pub start_pattern: Option<&'static str>,
    /// Regex form of the end marker, if the literal is not regex-safe
    pub end_pattern: Option<&'static str>,
}

impl CommentRule {
    const fn literal(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end,
            start_pattern: None,
            end_pattern: None,
        }
    }

    /// Start marker expression for scan patterns
    pub fn start_expr(&self) -> &'static str {
        self.start_pattern.unwrap_or(self.start)
    }

    /// End marker expression for scan patterns
    pub fn end_expr(&self) -> &'static str {
        self.end_pattern.unwrap_or(self.end)
    }
}

/// Rule for languages without a registered entry
static DEFAULT_RULE: CommentRule = CommentRule::literal("<!--", "-->");

static RULES: &[(&str, CommentRule)] = &[
    ("html", CommentRule::literal("<!--", "-->")),
    ("vue", CommentRule::literal("<!--", "-->")),
    ("markdown", CommentRule::literal("<!--", "-->")),
    ("php", CommentRule::literal("<!--", "-->")),
    ("xml", CommentRule::literal("<!--", "-->")),
    (
        "javascriptreact",
        CommentRule {
            start: "{/*",
            end: "*/}",
            start_pattern: Some(r"\{/\*"),
            end_pattern: Some(r"\*/\}"),
        },
    ),
    (
        "typescriptreact",
        CommentRule {
            start: "{/*",
            end: "*/}",
            start_pattern: Some(r"\{/\*"),
            end_pattern: Some(r"\*/\}"),
        },
    ),
    ("erb", CommentRule::literal("<%#", "%>")),
];

/// Look up the comment rule for a language id.
///
/// Unknown ids fall back to the default HTML-style rule; this never
/// fails.
pub fn rule_for(language_id: &str) -> &'static CommentRule {
    RULES
        .iter()
        .find(|(id, _)| *id == language_id)
        .map(|(_, rule)| rule)
        .unwrap_or(&DEFAULT_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let rule = rule_for("html");
        assert_eq!(rule.start, "<!--");
        assert_eq!(rule.end, "-->");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let rule = rule_for("some-unregistered-language");
        assert_eq!(*rule, DEFAULT_RULE);
    }

    #[test]
    fn test_pattern_form_takes_precedence() {
        let rule = rule_for("javascriptreact");
        assert_eq!(rule.start, "{/*");
        assert_eq!(rule.start_expr(), r"\{/\*");
        assert_eq!(rule.end_expr(), r"\*/\}");
    }

    #[test]
    fn test_literal_used_when_no_pattern() {
        let rule = rule_for("erb");
        assert_eq!(rule.start_expr(), "<%#");
        assert_eq!(rule.end_expr(), "%>");
    }
}
