//! Comment marker matching.
//!
//! A line is documentation when it starts with optional whitespace, the
//! marker, and optional whitespace. The marker is a regular-expression
//! fragment, so callers can pass alternations such as `//|#`.

use crate::error::Result;
use crate::language::Language;
use regex::Regex;
use std::sync::LazyLock;

/// Marker used when none is configured.
pub const DEFAULT_MARKER: &str = "//";

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&pattern_for(DEFAULT_MARKER)).unwrap());

fn pattern_for(marker: &str) -> String {
    // Grouped so an alternation stays anchored to the line start.
    format!(r"^\s*(?:{})\s*", marker)
}

/// Compiled test for documentation lines.
///
/// Cloning is cheap and the pattern is immutable, so one marker can be
/// shared by every conversion in a batch.
#[derive(Debug, Clone)]
pub struct CommentMarker {
    marker: String,
    pattern: Regex,
}

impl Default for CommentMarker {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl CommentMarker {
    /// Compiles a marker pattern.
    ///
    /// Fails with [`crate::Error::InvalidMarker`] if the marker is not a
    /// valid regular-expression fragment.
    pub fn new(marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        let pattern = Regex::new(&pattern_for(&marker))?;
        Ok(Self { marker, pattern })
    }

    /// Builds the marker for a language's line comment, matched literally.
    pub fn for_language(language: Language) -> Result<Self> {
        Self::new(regex::escape(language.line_comment()))
    }

    /// The marker as configured.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns true if the line is a documentation line.
    pub fn is_prose(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Returns the documentation text with the marker and surrounding
    /// whitespace removed, or `None` for a code line.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern.find(line).map(|m| &line[m.end()..])
    }
}
