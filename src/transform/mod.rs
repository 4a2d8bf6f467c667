//! Listing transformation.
//!
//! Every line of a source file is either prose (it matches the comment
//! marker) or code. The transformer walks the lines once, tracking which
//! of the two it emitted last, and lets the target [`Dialect`] decide how
//! code blocks are opened, closed and indented.

mod latex;
mod markdown;

pub use latex::{LatexEnvironment, LatexMarkup};
pub use markdown::MarkdownMarkup;

use crate::error::Result;
use crate::options::ListingOptions;
use crate::reader::LineReader;
use std::io::{Cursor, Read};
use std::path::Path;

/// Markup emitted around prose and code.
///
/// Each method appends to `out`; the transformer adds the line terminator
/// after every prose and code line.
pub trait Markup {
    /// Document preamble.
    fn header(&self, title: &str, timestamp: Option<&str>, out: &mut String);

    /// Emitted when a code line follows prose (or starts the document).
    fn open_code(&self, out: &mut String);

    /// Emitted when a prose line follows code.
    fn close_code(&self, out: &mut String);

    /// Emitted when the document ends inside a code block.
    fn flush_code(&self, out: &mut String) {
        self.close_code(out);
    }

    fn prose_line(&self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn code_line(&self, line: &str, out: &mut String);

    /// Document epilogue.
    fn footer(&self, _out: &mut String) {}
}

/// Target markup dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Markdown with tab-indented code blocks.
    #[default]
    Markdown,
    /// LaTeX with `verbatim` environments.
    LatexVerbatim,
    /// LaTeX with framed `lstlisting` environments.
    LatexListing,
}

static MARKDOWN: MarkdownMarkup = MarkdownMarkup;
static LATEX_VERBATIM: LatexMarkup = LatexMarkup::new(LatexEnvironment::Verbatim);
static LATEX_LISTING: LatexMarkup = LatexMarkup::new(LatexEnvironment::Listing);

impl Dialect {
    /// The markup rules for this dialect.
    pub fn markup(&self) -> &'static dyn Markup {
        match self {
            Dialect::Markdown => &MARKDOWN,
            Dialect::LatexVerbatim => &LATEX_VERBATIM,
            Dialect::LatexListing => &LATEX_LISTING,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Markdown => write!(f, "Markdown"),
            Dialect::LatexVerbatim => write!(f, "LaTeX (verbatim)"),
            Dialect::LatexListing => write!(f, "LaTeX (lstlisting)"),
        }
    }
}

/// Converts a source file into a complete listing in one dialect.
#[derive(Debug)]
pub struct Listing<'a> {
    dialect: Dialect,
    options: &'a ListingOptions,
}

impl<'a> Listing<'a> {
    /// Creates a transformer for the given dialect.
    pub fn new(dialect: Dialect, options: &'a ListingOptions) -> Self {
        Self { dialect, options }
    }

    /// Transforms every line from `reader`.
    ///
    /// The listing is only returned once the input is fully consumed; a
    /// read error part way through fails the whole conversion.
    pub fn transform<R: Read>(&self, title: &str, reader: LineReader<R>) -> Result<String> {
        let markup = self.dialect.markup();
        let marker = &self.options.marker;

        let mut out = String::new();
        markup.header(title, self.options.timestamp().as_deref(), &mut out);

        let mut in_prose = true;
        let mut lines = 0usize;
        let mut code_blocks = 0usize;

        for line in reader {
            let line = line?;
            lines += 1;

            match marker.strip(&line) {
                Some(text) => {
                    if !in_prose {
                        markup.close_code(&mut out);
                        in_prose = true;
                    }
                    markup.prose_line(text, &mut out);
                }
                None => {
                    if in_prose {
                        markup.open_code(&mut out);
                        in_prose = false;
                        code_blocks += 1;
                    }
                    markup.code_line(&line, &mut out);
                }
            }
            out.push('\n');
        }

        if !in_prose {
            markup.flush_code(&mut out);
        }
        markup.footer(&mut out);

        tracing::debug!(title, dialect = %self.dialect, lines, code_blocks, "listing transformed");
        Ok(out)
    }

    /// Transforms an in-memory source.
    pub fn transform_str(&self, title: &str, source: &str) -> Result<String> {
        self.transform_reader(title, Cursor::new(source.as_bytes()))
    }

    /// Transforms a source from any reader.
    pub fn transform_reader<R: Read>(&self, title: &str, reader: R) -> Result<String> {
        let lines = LineReader::with_capacity(self.options.reader_capacity, reader);
        self.transform(title, lines)
    }

    /// Opens and transforms a file; the path as given becomes the title.
    pub fn transform_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        self.transform_reader(&path.display().to_string(), file)
    }
}
