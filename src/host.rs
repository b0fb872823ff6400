//! Host editor abstraction
//!
//! The engine never talks to a concrete editor. `EditorHost` is the
//! contract it relies on: a document snapshot, a theme mode, and the
//! decoration primitives. `BufferHost` is the in-memory implementation
//! used by the preview binary and by tests; it records every applied
//! decoration so callers can render or inspect the result.

use std::collections::BTreeMap;
use std::path::Path;

use crate::palette::ThemeMode;
use crate::scan::Span;

/// Opaque handle for a host decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecorationId(usize);

/// The editing environment the engine runs against
pub trait EditorHost {
    /// Snapshot of the active document text; `None` when no editor is
    /// active
    fn document_text(&self) -> Option<String>;
    /// Language id of the active document
    fn language_id(&self) -> &str;
    /// File name of the active document
    fn file_name(&self) -> &str;
    /// Current theme mode
    fn theme_mode(&self) -> ThemeMode;
    /// Create a decoration rendering text in the given color
    fn create_decoration(&mut self, color: &str) -> DecorationId;
    /// Apply a decoration to a set of spans, replacing its previous
    /// ranges
    fn apply_decoration(&mut self, id: DecorationId, spans: &[Span]);
    /// Release a decoration
    fn dispose_decoration(&mut self, id: DecorationId);
}

/// A decoration as recorded by [`BufferHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDecoration {
    pub color: String,
    pub spans: Vec<Span>,
}

/// In-memory host over a single document
pub struct BufferHost {
    text: String,
    language_id: String,
    file_name: String,
    mode: ThemeMode,
    next_id: usize,
    live: BTreeMap<DecorationId, AppliedDecoration>,
    created: usize,
    disposed: usize,
}

impl BufferHost {
    /// Create a host over the given document
    pub fn new(text: String, language_id: String, file_name: String, mode: ThemeMode) -> Self {
        Self {
            text,
            language_id,
            file_name,
            mode,
            next_id: 0,
            live: BTreeMap::new(),
            created: 0,
            disposed: 0,
        }
    }

    /// Document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the document text (a host edit event)
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Switch the theme mode (a host theme event)
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Live decorations in creation order
    pub fn applied(&self) -> Vec<&AppliedDecoration> {
        self.live.values().collect()
    }

    /// Number of live decoration handles
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total handles ever created
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Total handles disposed
    pub fn disposed_count(&self) -> usize {
        self.disposed
    }
}

impl EditorHost for BufferHost {
    fn document_text(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn theme_mode(&self) -> ThemeMode {
        self.mode
    }

    fn create_decoration(&mut self, color: &str) -> DecorationId {
        let id = DecorationId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.live.insert(
            id,
            AppliedDecoration {
                color: color.to_string(),
                spans: Vec::new(),
            },
        );
        id
    }

    fn apply_decoration(&mut self, id: DecorationId, spans: &[Span]) {
        if let Some(decoration) = self.live.get_mut(&id) {
            decoration.spans = spans.to_vec();
        }
    }

    fn dispose_decoration(&mut self, id: DecorationId) {
        if self.live.remove(&id).is_some() {
            self.disposed += 1;
        }
    }
}

/// Map a file path to a language id by extension.
///
/// Unknown extensions pass through lowercased; files without an
/// extension scan as plain text under the default comment rule.
pub fn language_id_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => "html".to_string(),
        Some("vue") => "vue".to_string(),
        Some("md") | Some("markdown") => "markdown".to_string(),
        Some("php") => "php".to_string(),
        Some("xml") | Some("svg") => "xml".to_string(),
        Some("jsx") => "javascriptreact".to_string(),
        Some("tsx") => "typescriptreact".to_string(),
        Some("erb") => "erb".to_string(),
        Some(other) => other.to_string(),
        None => "plaintext".to_string(),
    }
}
