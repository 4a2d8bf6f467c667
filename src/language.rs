//! Known languages and their line-comment markers.

use crate::error::{Error, Result};
use std::str::FromStr;

/// Languages whose line comments can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Lisp,
    Haskell,
    Python,
    Ruby,
    JavaScript,
    Erlang,
}

impl Language {
    /// Every supported language, in the order they are listed to users.
    pub fn all() -> &'static [Language] {
        &[
            Language::Go,
            Language::Lisp,
            Language::Haskell,
            Language::Python,
            Language::Ruby,
            Language::JavaScript,
            Language::Erlang,
        ]
    }

    /// Lowercase name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Lisp => "lisp",
            Language::Haskell => "haskell",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::JavaScript => "javascript",
            Language::Erlang => "erlang",
        }
    }

    /// The literal text that starts a documentation line.
    pub fn line_comment(&self) -> &'static str {
        match self {
            Language::Go | Language::JavaScript => "//",
            Language::Lisp => ";;;",
            Language::Haskell => "--",
            Language::Python | Language::Ruby => "#",
            Language::Erlang => "%%",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.name() == wanted)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}
