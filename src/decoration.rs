//! Owned decoration handles
//!
//! Host decoration handles are a scoped resource: the prior handle for
//! a tag must be released before a new one is installed. Wrapping the
//! raw id in an owned type makes the dispose-before-replace discipline
//! the only way to update a decoration, so call sites cannot leak
//! handles.

use crate::host::{DecorationId, EditorHost};
use crate::scan::Span;

/// An installed host decoration, owned by one tag record
#[derive(Debug)]
pub struct Decoration {
    id: DecorationId,
}

impl Decoration {
    /// Create a decoration for the color and apply it to the spans
    pub fn create(host: &mut dyn EditorHost, color: &str, spans: &[Span]) -> Self {
        let id = host.create_decoration(color);
        host.apply_decoration(id, spans);
        Self { id }
    }

    /// Dispose the current handle, then install a fresh one
    pub fn replace(self, host: &mut dyn EditorHost, color: &str, spans: &[Span]) -> Self {
        host.dispose_decoration(self.id);
        Self::create(host, color, spans)
    }

    /// Release the handle
    pub fn dispose(self, host: &mut dyn EditorHost) {
        host.dispose_decoration(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::BufferHost;
    use crate::palette::ThemeMode;

    fn host() -> BufferHost {
        BufferHost::new(
            "<div>".to_string(),
            "html".to_string(),
            "index.html".to_string(),
            ThemeMode::Dark,
        )
    }

    #[test]
    fn test_create_applies_spans() {
        let mut host = host();
        let _decoration = Decoration::create(&mut host, "#61AFEF", &[Span::new(0, 5)]);
        assert_eq!(host.live_count(), 1);
        assert_eq!(host.applied()[0].color, "#61AFEF");
        assert_eq!(host.applied()[0].spans, [Span::new(0, 5)]);
    }

    #[test]
    fn test_replace_disposes_first() {
        let mut host = host();
        let decoration = Decoration::create(&mut host, "#61AFEF", &[Span::new(0, 5)]);
        let _decoration = decoration.replace(&mut host, "#61AFEF", &[Span::new(1, 4)]);

        assert_eq!(host.live_count(), 1);
        assert_eq!(host.created_count(), 2);
        assert_eq!(host.disposed_count(), 1);
        assert_eq!(host.applied()[0].spans, [Span::new(1, 4)]);
    }

    #[test]
    fn test_replace_with_no_spans_keeps_handle() {
        // Zero matches still goes through dispose-then-create
        let mut host = host();
        let decoration = Decoration::create(&mut host, "#61AFEF", &[Span::new(0, 5)]);
        let _decoration = decoration.replace(&mut host, "#61AFEF", &[]);
        assert_eq!(host.live_count(), 1);
        assert!(host.applied()[0].spans.is_empty());
    }

    #[test]
    fn test_dispose_releases() {
        let mut host = host();
        let decoration = Decoration::create(&mut host, "#61AFEF", &[]);
        decoration.dispose(&mut host);
        assert_eq!(host.live_count(), 0);
    }
}
