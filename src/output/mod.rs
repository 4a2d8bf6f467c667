//! Delivery of finished listings.
//!
//! [`OutputFormat`] names where a listing goes. Plain text formats are
//! written directly; document formats are handed to a [`Renderer`],
//! normally [`Pandoc`].

mod pandoc;

pub use pandoc::{Pandoc, PDF_TEMPLATE};

use crate::error::{Error, Result};
use crate::options::OutputOptions;
use crate::transform::Dialect;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown on standard output.
    #[default]
    Stdout,
    /// HTML document rendered by pandoc.
    Html,
    /// Standalone LaTeX rendered by pandoc.
    Latex,
    /// Markdown file.
    Markdown,
    /// PDF rendered by pandoc.
    Pdf,
    /// TeX file with `lstlisting` code blocks.
    Tex,
    /// TeX file with `verbatim` code blocks.
    Verbatim,
}

impl OutputFormat {
    /// Every format, in the order they are listed to users.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Stdout,
            OutputFormat::Html,
            OutputFormat::Latex,
            OutputFormat::Markdown,
            OutputFormat::Pdf,
            OutputFormat::Tex,
            OutputFormat::Verbatim,
        ]
    }

    /// Keyword accepted on the command line.
    pub fn keyword(&self) -> &'static str {
        match self {
            OutputFormat::Stdout => "-",
            OutputFormat::Html => "html",
            OutputFormat::Latex => "latex",
            OutputFormat::Markdown => "md",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Tex => "tex",
            OutputFormat::Verbatim => "verbatim",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Stdout => "write markdown to standard output",
            OutputFormat::Html => "produce an HTML listing",
            OutputFormat::Latex => "produce a LaTeX listing",
            OutputFormat::Markdown => "write markdown to file",
            OutputFormat::Pdf => "produce a PDF listing",
            OutputFormat::Tex => "produce a TeX listing",
            OutputFormat::Verbatim => "produce a TeX listing with verbatim blocks",
        }
    }

    /// The dialect listings are transformed into before delivery.
    pub fn dialect(&self) -> Dialect {
        match self {
            OutputFormat::Tex => Dialect::LatexListing,
            OutputFormat::Verbatim => Dialect::LatexVerbatim,
            _ => Dialect::Markdown,
        }
    }

    /// Extension appended to the source file name, or `None` for stdout.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Stdout => None,
            OutputFormat::Html => Some("html"),
            OutputFormat::Latex => Some("ltx"),
            OutputFormat::Markdown => Some("md"),
            OutputFormat::Pdf => Some("pdf"),
            OutputFormat::Tex | OutputFormat::Verbatim => Some("tex"),
        }
    }

    /// How the renderer is invoked, for formats that need one.
    pub fn render_request(&self) -> Option<RenderRequest<'static>> {
        match self {
            OutputFormat::Html | OutputFormat::Latex => Some(RenderRequest {
                standalone: true,
                ..RenderRequest::default()
            }),
            OutputFormat::Pdf => Some(RenderRequest {
                listings: true,
                template: Some(PDF_TEMPLATE),
                ..RenderRequest::default()
            }),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.keyword() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Renderer settings for one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    /// Produce a complete document rather than a fragment.
    pub standalone: bool,
    /// Typeset code blocks with the `listings` package.
    pub listings: bool,
    /// Template text to render with.
    pub template: Option<&'a str>,
    /// Document title metadata.
    pub title: Option<&'a str>,
}

/// Turns markup into a rendered document at `output`.
pub trait Renderer: Send + Sync {
    fn render(&self, markup: &str, output: &Path, request: &RenderRequest<'_>) -> Result<()>;
}

/// Writes, prints or renders finished listings.
pub struct Delivery {
    options: OutputOptions,
    renderer: Box<dyn Renderer>,
}

impl Delivery {
    /// Creates a delivery stage that renders with pandoc.
    pub fn new(options: OutputOptions) -> Self {
        Self {
            options,
            renderer: Box::new(Pandoc::default()),
        }
    }

    /// Replaces the renderer.
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.options.format
    }

    /// Where the listing for `source` is written, or `None` for stdout.
    ///
    /// The source's file name keeps its extension: `main.go` becomes
    /// `<dir>/main.go.md`.
    pub fn output_path(&self, source: &Path) -> Option<PathBuf> {
        let extension = self.options.format.extension()?;
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "listing".to_string());
        Some(self.options.output_dir.join(format!("{}.{}", name, extension)))
    }

    /// Delivers a listing, printing to the process's standard output.
    pub fn deliver(&self, markup: &str, source: &Path) -> Result<Option<PathBuf>> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.deliver_to(markup, source, &mut handle)
    }

    /// Delivers a listing, using `stdout` for the standard output format.
    ///
    /// Returns the path written, if any.
    pub fn deliver_to<W: Write>(
        &self,
        markup: &str,
        source: &Path,
        stdout: &mut W,
    ) -> Result<Option<PathBuf>> {
        let Some(path) = self.output_path(source) else {
            writeln!(stdout, "{}", markup)?;
            return Ok(None);
        };

        match self.options.format.render_request() {
            Some(request) => {
                let title = source.display().to_string();
                let request = RenderRequest {
                    title: Some(&title),
                    ..request
                };
                self.renderer.render(markup, &path, &request)?;
            }
            None => std::fs::write(&path, markup)?,
        }

        tracing::info!(source = %source.display(), output = %path.display(), "listing written");
        Ok(Some(path))
    }
}
