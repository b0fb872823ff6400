//! Terminal preview rendering
//!
//! Turns a document plus its applied decorations into ANSI-colored
//! output. Segmentation is kept separate from terminal emission:
//! `segments` is pure range arithmetic, `render_ansi` maps hex colors
//! to 24-bit foreground styling via crossterm.

use std::ops::Range;

use crossterm::style::{Color, Stylize};

use crate::host::AppliedDecoration;

/// Parse a `#RRGGBB` color into a terminal color
pub fn parse_hex(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

/// Split the document into uncolored and colored runs.
///
/// Spans are taken in source order; empty, out-of-bounds, and
/// overlapping spans are dropped (first decoration wins on overlap).
pub fn segments<'a>(
    src: &str,
    decorations: &[&'a AppliedDecoration],
) -> Vec<(Range<usize>, Option<&'a str>)> {
    let mut colored: Vec<(Range<usize>, &str)> = decorations
        .iter()
        .copied()
        .flat_map(|decoration| {
            decoration
                .spans
                .iter()
                .filter(|span| !span.is_empty() && span.end <= src.len())
                .map(|span| (span.start..span.end, decoration.color.as_str()))
        })
        .collect();
    colored.sort_by_key(|(range, _)| range.start);

    let mut out = Vec::new();
    let mut cursor = 0;
    for (range, color) in colored {
        if range.start < cursor {
            continue;
        }
        if range.start > cursor {
            out.push((cursor..range.start, None));
        }
        cursor = range.end;
        out.push((range, Some(color)));
    }
    if cursor < src.len() {
        out.push((cursor..src.len(), None));
    }
    out
}

/// Render the document with its decorations as an ANSI string
pub fn render_ansi(src: &str, decorations: &[&AppliedDecoration]) -> String {
    let mut out = String::with_capacity(src.len());
    for (range, color) in segments(src, decorations) {
        let text = &src[range];
        match color.and_then(parse_hex) {
            Some(color) => out.push_str(&format!("{}", text.with(color))),
            None => out.push_str(text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Span;

    fn decoration(color: &str, spans: &[Span]) -> AppliedDecoration {
        AppliedDecoration {
            color: color.to_string(),
            spans: spans.to_vec(),
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_hex("#61AFEF"),
            Some(Color::Rgb {
                r: 0x61,
                g: 0xAF,
                b: 0xEF
            })
        );
        assert_eq!(parse_hex("61AFEF"), None);
        assert_eq!(parse_hex("#61AF"), None);
        assert_eq!(parse_hex("#61AFEG"), None);
    }

    #[test]
    fn test_segments_with_gaps() {
        let src = "ab<p>cd</p>";
        let dec = decoration("#FF0000", &[Span::new(2, 5), Span::new(7, 11)]);
        let segs = segments(src, &[&dec]);
        assert_eq!(
            segs,
            [
                (0..2, None),
                (2..5, Some("#FF0000")),
                (5..7, None),
                (7..11, Some("#FF0000")),
            ]
        );
    }

    #[test]
    fn test_segments_drop_empty_and_out_of_bounds() {
        let src = "<p>";
        let dec = decoration("#FF0000", &[Span::new(1, 1), Span::new(2, 99)]);
        let segs = segments(src, &[&dec]);
        assert_eq!(segs, [(0..3, None)]);
    }

    #[test]
    fn test_segments_first_wins_on_overlap() {
        let src = "abcdef";
        let first = decoration("#FF0000", &[Span::new(0, 4)]);
        let second = decoration("#00FF00", &[Span::new(2, 6)]);
        let segs = segments(src, &[&first, &second]);
        assert_eq!(segs, [(0..4, Some("#FF0000")), (4..6, None)]);
    }

    #[test]
    fn test_render_without_decorations_is_identity() {
        let src = "plain text, no tags";
        assert_eq!(render_ansi(src, &[]), src);
    }

    #[test]
    fn test_render_emits_color_codes() {
        let src = "<p>";
        let dec = decoration("#FF0000", &[Span::new(0, 3)]);
        let out = render_ansi(src, &[&dec]);
        assert!(out.contains("<p>"));
        assert!(out.len() > src.len());
    }
}
