//! Search scope selection
//!
//! Hybrid document formats embed markup inside a named block among
//! non-markup code. Scanning the whole file would color tag-like syntax
//! in the surrounding code, so the scope is narrowed before discovery.

use regex::Regex;

use crate::error::Result;

/// Select the part of a document to search for tags.
///
/// For `vue` documents this is the inner content of the first
/// `<template>` block, or an empty scope when no template block exists
/// (script-only components have nothing to decorate). Every other
/// language scans the full text.
pub fn search_scope<'a>(src: &'a str, language_id: &str) -> Result<&'a str> {
    match language_id {
        "vue" => {
            let template = Regex::new(r"(?s)<template>(.*?)</template>")?;
            Ok(template
                .captures(src)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .unwrap_or(""))
        }
        _ => Ok(src),
    }
}
