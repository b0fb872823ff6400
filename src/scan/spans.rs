//! Highlight span computation
//!
//! For one tag name, the full source is scanned with a combined pattern
//! of three alternatives: comment start, comment end, and the tag
//! occurrence itself. Comment tokens drive a two-state machine; tag
//! matches made while inside a comment are skipped (the scan still
//! advances past them). An unterminated comment leaves the machine in
//! `InComment` for the rest of the pass, suppressing all later matches:
//! no highlighting rather than mis-highlighting in ambiguous regions.

use fancy_regex::Regex;

use super::comment::CommentRule;
use super::span::Span;
use crate::error::Result;

/// Scan state while walking a source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InComment,
}

/// Characters that delimit interpolation segments in whole-tag matches
const INTERPOLATION_DELIMITERS: &[char] = &['{', '}', '"'];

/// Compute the highlight spans for one tag name over the full source.
///
/// With `only_tag_name` set, each span covers just the bare name inside
/// the brackets. Otherwise spans cover the whole tag, minus any
/// `{expression}` / `"string"` interpolation segments embedded in
/// attribute values.
pub fn compute_spans(
    tag_name: &str,
    src: &str,
    rule: &CommentRule,
    only_tag_name: bool,
) -> Result<Vec<Span>> {
    let escaped = regex::escape(tag_name);
    let pattern = if only_tag_name {
        // Lookahead keeps partial names out: `<div>` must not match `di`
        format!(
            r"(?m){}|{}|<(/?){}(?=\s|/>|>|$)",
            rule.start_expr(),
            rule.end_expr(),
            escaped
        )
    } else {
        format!(
            r"(?m){}|{}|<(?:/|){}(?:$|(?:| (?:.*?)[^-?%$])(?<!=)>)",
            rule.start_expr(),
            rule.end_expr(),
            escaped
        )
    };
    let regex = Regex::new(&pattern)?;

    let mut state = ScanState::Normal;
    let mut spans = Vec::new();
    for caps in regex.captures_iter(src) {
        let caps = caps?;
        let Some(whole) = caps.get(0) else { continue };
        if whole.as_str() == rule.start {
            state = ScanState::InComment;
            continue;
        }
        if whole.as_str() == rule.end {
            state = ScanState::Normal;
            continue;
        }
        if state == ScanState::InComment {
            continue;
        }
        if only_tag_name {
            let slash_len = caps.get(1).map_or(0, |group| group.as_str().len());
            let start = whole.start() + 1 + slash_len;
            spans.push(Span::new(start, start + tag_name.len()));
        } else {
            literal_segments(whole.start(), whole.as_str(), &mut spans);
        }
    }
    Ok(spans)
}

/// Split a whole-tag match on the interpolation delimiters and collect
/// one span per even-indexed segment. Odd segments are the interpolated
/// code or string content and stay uncolored. Without any delimiters
/// the whole match is one span.
fn literal_segments(base: usize, text: &str, spans: &mut Vec<Span>) {
    let segments: Vec<&str> = text.split(INTERPOLATION_DELIMITERS).collect();
    if segments.len() <= 2 {
        spans.push(Span::new(base, base + text.len()));
        return;
    }
    let mut offset = 0;
    for (i, segment) in segments.iter().enumerate() {
        if i % 2 == 0 {
            spans.push(Span::new(base + offset, base + offset + segment.len()));
        }
        offset += segment.len() + 1;
    }
}
