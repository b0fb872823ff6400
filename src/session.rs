//! Tag session and decoration controller
//!
//! `TagSession` owns the set of tags tracked for the active editor: one
//! record per distinct tag name, in first-seen order, each holding its
//! assigned color and its installed decoration. The set is extended as
//! edits introduce new tags and only ever cleared wholesale, so a tag
//! keeps its first-assigned color for the lifetime of a theme and
//! configuration.
//!
//! `Colorizer` is the event-driven controller on top: host events map
//! to full decoration passes, and theme or configuration changes clear
//! the session before the next pass.

use crate::config::Config;
use crate::decoration::Decoration;
use crate::error::Result;
use crate::host::EditorHost;
use crate::palette::{self, ThemeMode};
use crate::scan;

/// One tracked tag: name, assigned color, installed decoration
#[derive(Debug)]
pub struct TagRecord {
    tag_name: String,
    tag_color: &'static str,
    decoration: Option<Decoration>,
}

impl TagRecord {
    /// Tag name
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Assigned color
    pub fn tag_color(&self) -> &'static str {
        self.tag_color
    }
}

/// The set of tags tracked for the active editor
#[derive(Debug, Default)]
pub struct TagSession {
    records: Vec<TagRecord>,
}

impl TagSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a tag name is already tracked
    pub fn is_tracked(&self, tag_name: &str) -> bool {
        self.records.iter().any(|record| record.tag_name == tag_name)
    }

    /// Add records for names not yet tracked, assigning each a color.
    ///
    /// Tracked names are left untouched; a tag keeps its first-assigned
    /// color.
    pub fn extend(&mut self, names: &[String], mode: ThemeMode) -> Result<()> {
        for name in names {
            if self.is_tracked(name) {
                continue;
            }
            let color = palette::assign(name, mode)?;
            self.records.push(TagRecord {
                tag_name: name.clone(),
                tag_color: color,
                decoration: None,
            });
        }
        Ok(())
    }

    /// Dispose every decoration and clear the set
    pub fn reset(&mut self, host: &mut dyn EditorHost) {
        for record in self.records.drain(..) {
            if let Some(decoration) = record.decoration {
                decoration.dispose(host);
            }
        }
    }

    /// Tracked records in first-seen order
    pub fn records(&self) -> &[TagRecord] {
        &self.records
    }

    /// Number of tracked tags
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no tags are tracked
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Event-driven controller owning the configuration and session
pub struct Colorizer {
    config: Config,
    session: TagSession,
}

impl Colorizer {
    /// Create a controller with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: TagSession::new(),
        }
    }

    /// Activation: run one full decoration pass immediately
    pub fn activate(&mut self, host: &mut dyn EditorHost) -> Result<()> {
        self.decorate(host)
    }

    /// Deactivation: release every decoration handle
    pub fn deactivate(&mut self, host: &mut dyn EditorHost) {
        self.session.reset(host);
    }

    /// The active editor changed
    pub fn on_editor_changed(&mut self, host: &mut dyn EditorHost) -> Result<()> {
        self.decorate(host)
    }

    /// The document text changed
    pub fn on_text_changed(&mut self, host: &mut dyn EditorHost) -> Result<()> {
        self.decorate(host)
    }

    /// The theme changed: colors are stale, rebuild from scratch
    pub fn on_theme_changed(&mut self, host: &mut dyn EditorHost) -> Result<()> {
        self.session.reset(host);
        self.decorate(host)
    }

    /// The configuration changed: rebuild under the new settings
    pub fn set_config(&mut self, config: Config, host: &mut dyn EditorHost) -> Result<()> {
        self.config = config;
        self.session.reset(host);
        self.decorate(host)
    }

    /// Tracked tag state
    pub fn session(&self) -> &TagSession {
        &self.session
    }

    /// One full decoration pass.
    ///
    /// No active editor, an excluded file name, and an empty search
    /// scope are all no-ops. Otherwise every tracked tag's spans are
    /// recomputed and its decoration replaced, old handle disposed
    /// first, even when the new scan yields zero spans.
    fn decorate(&mut self, host: &mut dyn EditorHost) -> Result<()> {
        let Some(src) = host.document_text() else {
            return Ok(());
        };
        if self.config.is_excluded(host.file_name()) {
            return Ok(());
        }
        let language_id = host.language_id().to_string();

        let scope = scan::search_scope(&src, &language_id)?;
        if scope.is_empty() {
            return Ok(());
        }

        let names = scan::collect_tag_names(scope)?;
        self.session.extend(&names, host.theme_mode())?;

        let rule = scan::rule_for(&language_id);
        let only_tag_name = self.config.only_color_tag_name;
        for record in self.session.records.iter_mut() {
            let spans = scan::compute_spans(&record.tag_name, &src, rule, only_tag_name)?;
            let color = record.tag_color;
            record.decoration = Some(match record.decoration.take() {
                Some(decoration) => decoration.replace(host, color, &spans),
                None => Decoration::create(host, color, &spans),
            });
        }
        Ok(())
    }
}
