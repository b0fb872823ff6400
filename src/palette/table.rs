//! Built-in color tables
//!
//! One fixed ordering of (tag name, color) entries per theme mode. The
//! ordering is shared by both tables and serves two purposes: explicit
//! lookup by name, and positional fallback indexing for names without an
//! entry. The table length therefore bounds the fallback index space.

/// A (tag name, hex color) table entry
pub type ColorEntry = (&'static str, &'static str);

/// Light-mode colors, ordered
pub static LIGHT: &[ColorEntry] = &[
    ("html", "#0451A5"),
    ("head", "#267F99"),
    ("body", "#0070C1"),
    ("title", "#795E26"),
    ("meta", "#001080"),
    ("link", "#0E7490"),
    ("script", "#AF00DB"),
    ("style", "#7C3AED"),
    ("template", "#9D174D"),
    ("slot", "#6F42C1"),
    ("div", "#1A6FB5"),
    ("span", "#098658"),
    ("p", "#795E26"),
    ("a", "#A31515"),
    ("img", "#388A34"),
    ("ul", "#8B6914"),
    ("ol", "#B8860B"),
    ("li", "#2E7D32"),
    ("dl", "#0F766E"),
    ("dt", "#00695C"),
    ("dd", "#33691E"),
    ("table", "#8B6914"),
    ("thead", "#795E26"),
    ("tbody", "#6D4C41"),
    ("tfoot", "#5D4037"),
    ("tr", "#827717"),
    ("td", "#455A64"),
    ("th", "#37474F"),
    ("caption", "#6A1B9A"),
    ("form", "#0277BD"),
    ("input", "#0288D1"),
    ("button", "#C62828"),
    ("label", "#00838F"),
    ("select", "#283593"),
    ("option", "#303F9F"),
    ("textarea", "#1565C0"),
    ("fieldset", "#4527A0"),
    ("legend", "#512DA8"),
    ("h1", "#B71C1C"),
    ("h2", "#BF360C"),
    ("h3", "#E65100"),
    ("h4", "#F57F17"),
    ("h5", "#9E9D24"),
    ("h6", "#827717"),
    ("header", "#AD1457"),
    ("footer", "#880E4F"),
    ("nav", "#4A148C"),
    ("main", "#1B5E20"),
    ("section", "#2E7D32"),
    ("article", "#00695C"),
    ("aside", "#004D40"),
    ("strong", "#BF360C"),
    ("em", "#6D4C41"),
    ("small", "#546E7A"),
    ("code", "#D81B60"),
    ("pre", "#3E2723"),
    ("blockquote", "#00796B"),
    ("figure", "#5E35B1"),
    ("figcaption", "#673AB7"),
    ("video", "#E64A19"),
    ("audio", "#F4511E"),
    ("canvas", "#006064"),
    ("svg", "#2962FF"),
    ("iframe", "#263238"),
];

/// Dark-mode colors, same ordering as [`LIGHT`]
pub static DARK: &[ColorEntry] = &[
    ("html", "#569CD6"),
    ("head", "#4EC9B0"),
    ("body", "#4FC1FF"),
    ("title", "#DCDCAA"),
    ("meta", "#9CDCFE"),
    ("link", "#56B6C2"),
    ("script", "#C586C0"),
    ("style", "#B392F0"),
    ("template", "#D16D9E"),
    ("slot", "#B180D7"),
    ("div", "#61AFEF"),
    ("span", "#56D364"),
    ("p", "#D7BA7D"),
    ("a", "#CE9178"),
    ("img", "#98C379"),
    ("ul", "#E5C07B"),
    ("ol", "#DEB974"),
    ("li", "#6A9955"),
    ("dl", "#4DB6AC"),
    ("dt", "#26A69A"),
    ("dd", "#9CCC65"),
    ("table", "#D7BA7D"),
    ("thead", "#C8AE7D"),
    ("tbody", "#BCAAA4"),
    ("tfoot", "#A1887F"),
    ("tr", "#D4C05E"),
    ("td", "#90A4AE"),
    ("th", "#B0BEC5"),
    ("caption", "#CE93D8"),
    ("form", "#4FC3F7"),
    ("input", "#81D4FA"),
    ("button", "#EF9A9A"),
    ("label", "#4DD0E1"),
    ("select", "#9FA8DA"),
    ("option", "#7986CB"),
    ("textarea", "#64B5F6"),
    ("fieldset", "#B39DDB"),
    ("legend", "#9575CD"),
    ("h1", "#FF8A80"),
    ("h2", "#FF9E80"),
    ("h3", "#FFB74D"),
    ("h4", "#FFD54F"),
    ("h5", "#DCE775"),
    ("h6", "#D4E157"),
    ("header", "#F48FB1"),
    ("footer", "#F06292"),
    ("nav", "#BA68C8"),
    ("main", "#81C784"),
    ("section", "#A5D6A7"),
    ("article", "#80CBC4"),
    ("aside", "#4DB6AC"),
    ("strong", "#FFAB91"),
    ("em", "#D7CCC8"),
    ("small", "#B0BEC5"),
    ("code", "#FF80AB"),
    ("pre", "#BCAAA4"),
    ("blockquote", "#80CBC4"),
    ("figure", "#B39DDB"),
    ("figcaption", "#C5AEE8"),
    ("video", "#FF8A65"),
    ("audio", "#FFAB91"),
    ("canvas", "#80DEEA"),
    ("svg", "#82B1FF"),
    ("iframe", "#B0BEC5"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_aligned() {
        assert_eq!(LIGHT.len(), DARK.len());
        for (light, dark) in LIGHT.iter().zip(DARK.iter()) {
            assert_eq!(light.0, dark.0, "table orderings must match");
        }
    }

    #[test]
    fn test_colors_are_hex() {
        for (name, color) in LIGHT.iter().chain(DARK.iter()) {
            assert!(color.starts_with('#'), "{name}: {color}");
            assert_eq!(color.len(), 7, "{name}: {color}");
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_names_unique() {
        for (i, (name, _)) in LIGHT.iter().enumerate() {
            assert!(
                !LIGHT[i + 1..].iter().any(|(other, _)| other == name),
                "duplicate entry for {name}"
            );
        }
    }
}
