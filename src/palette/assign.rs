//! Deterministic color assignment
//!
//! Well-known tag names get their curated table entry. Anything else is
//! assigned by position: the tag's length plus its lowercase vowel count
//! indexes the ordered table entries. Two names with equal length and
//! vowel count share a fallback color; the collision is accepted because
//! the assignment stays deterministic and reproducible.

use super::ThemeMode;
use crate::error::{HighlightError, Result};

/// Assign a color to a tag name under the given theme mode.
///
/// An index beyond the table is an error rather than a wraparound; the
/// tables are sized to cover realistic tag names.
pub fn assign(tag_name: &str, mode: ThemeMode) -> Result<&'static str> {
    let table = mode.table();
    if let Some((_, color)) = table.iter().find(|(name, _)| *name == tag_name) {
        return Ok(color);
    }
    let index = fallback_index(tag_name);
    match table.get(index) {
        Some((_, color)) => Ok(color),
        None => Err(HighlightError::PaletteExhausted {
            tag_name: tag_name.to_string(),
            index,
            len: table.len(),
        }),
    }
}

/// Fallback table index: name length plus lowercase vowel count.
fn fallback_index(tag_name: &str) -> usize {
    let vowels = tag_name
        .chars()
        .filter(|c| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o'))
        .count();
    tag_name.len() + vowels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{DARK, LIGHT};

    #[test]
    fn test_explicit_entry() {
        assert_eq!(assign("div", ThemeMode::Light).unwrap(), "#1A6FB5");
        assert_eq!(assign("div", ThemeMode::Dark).unwrap(), "#61AFEF");
    }

    #[test]
    fn test_fallback_index() {
        assert_eq!(fallback_index("qqq"), 3);
        assert_eq!(fallback_index("aiueo"), 10);
        // Only lowercase vowels count
        assert_eq!(fallback_index("AIUEO"), 5);
        // y is not a vowel here
        assert_eq!(fallback_index("xyz"), 3);
    }

    #[test]
    fn test_fallback_is_positional() {
        // "qqq" has no table entry: length 3, no vowels
        assert_eq!(assign("qqq", ThemeMode::Dark).unwrap(), DARK[3].1);
        assert_eq!(assign("qqq", ThemeMode::Light).unwrap(), LIGHT[3].1);
    }

    #[test]
    fn test_equal_length_and_vowels_collide() {
        // Deterministic collision: same length, same vowel count
        let a = assign("xqz", ThemeMode::Dark).unwrap();
        let b = assign("wvy", ThemeMode::Dark).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_assignment_is_stable() {
        let first = assign("my-widget", ThemeMode::Dark).unwrap();
        let second = assign("my-widget", ThemeMode::Dark).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_palette_exhausted() {
        let name = "x".repeat(DARK.len());
        let err = assign(&name, ThemeMode::Dark).unwrap_err();
        match err {
            HighlightError::PaletteExhausted { index, len, .. } => {
                assert_eq!(index, DARK.len());
                assert_eq!(len, DARK.len());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
