//! Tag scanning module
//!
//! This module provides the text-scanning half of the engine:
//! - Scope selection (which part of a document to search)
//! - Tag name discovery
//! - Comment-aware highlight span computation

mod comment;
mod scope;
mod span;
mod spans;
mod tags;

pub use comment::{rule_for, CommentRule};
pub use scope::search_scope;
pub use span::Span;
pub use spans::{compute_spans, ScanState};
pub use tags::collect_tag_names;
