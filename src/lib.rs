//! # litlist
//!
//! Turns commented source files into literate listings. Lines that start
//! with the comment marker become prose; everything else becomes code.
//!
//! ## Quick Start
//!
//! ```no_run
//! use litlist::{transform_file, Dialect, ListingOptions};
//!
//! fn main() -> litlist::Result<()> {
//!     let options = ListingOptions::default();
//!     let markdown = transform_file("main.go", Dialect::Markdown, &options)?;
//!
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! - **Markdown**: prose as text, code as tab-indented blocks
//! - **LaTeX**: code inside `verbatim` or framed `lstlisting` environments
//! - **HTML / PDF / standalone LaTeX**: Markdown rendered through pandoc,
//!   see [`output::Delivery`]
//!
//! ## Features
//!
//! - `async`: Async I/O support with Tokio

pub mod error;
pub mod language;
pub mod marker;
pub mod options;
pub mod output;
pub mod reader;
pub mod transform;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use error::{Error, Result};
pub use language::Language;
pub use marker::{CommentMarker, DEFAULT_MARKER};
pub use options::{ListingOptions, OutputOptions, DEFAULT_DATE_FORMAT};
pub use output::{Delivery, OutputFormat, Pandoc, RenderRequest, Renderer};
pub use reader::LineReader;
pub use transform::{Dialect, Listing};

use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Converts a file to a listing.
///
/// # Example
///
/// ```no_run
/// use litlist::{transform_file, Dialect, ListingOptions};
///
/// let tex = transform_file("main.go", Dialect::LatexListing, &ListingOptions::default())?;
/// std::fs::write("main.go.tex", tex)?;
/// # Ok::<(), litlist::Error>(())
/// ```
pub fn transform_file(
    path: impl AsRef<Path>,
    dialect: Dialect,
    options: &ListingOptions,
) -> Result<String> {
    Listing::new(dialect, options).transform_file(path)
}

/// Converts source text to a listing titled `title`.
pub fn transform_str(
    title: &str,
    source: &str,
    dialect: Dialect,
    options: &ListingOptions,
) -> Result<String> {
    Listing::new(dialect, options).transform_str(title, source)
}

/// Converts source from a reader to a listing titled `title`.
pub fn transform_reader<R: Read>(
    title: &str,
    reader: R,
    dialect: Dialect,
    options: &ListingOptions,
) -> Result<String> {
    Listing::new(dialect, options).transform_reader(title, reader)
}

/// Converts a file to Markdown with default options.
pub fn to_markdown(path: impl AsRef<Path>) -> Result<String> {
    transform_file(path, Dialect::Markdown, &ListingOptions::default())
}

/// Outcome of converting one file in a batch.
#[derive(Debug)]
pub struct Converted {
    /// The source file as given.
    pub path: PathBuf,
    /// The finished listing, or why the file could not be converted.
    pub result: Result<String>,
}

/// Converts every file independently, in input order.
///
/// A failure on one file is recorded in its [`Converted`] entry and does
/// not affect the others. Files are converted in parallel unless
/// [`ListingOptions::sequential`] was set.
///
/// All listings are held in memory until the whole batch is done. Callers
/// that want to write each listing as soon as it exists should call
/// [`transform_file`] per file instead.
///
/// # Example
///
/// ```no_run
/// use litlist::{transform_files, Dialect, ListingOptions};
///
/// let options = ListingOptions::default();
/// for converted in transform_files(&["a.go", "b.go"], Dialect::Markdown, &options) {
///     match converted.result {
///         Ok(listing) => println!("{}", listing),
///         Err(e) => eprintln!("{}: {}", converted.path.display(), e),
///     }
/// }
/// ```
pub fn transform_files<P>(paths: &[P], dialect: Dialect, options: &ListingOptions) -> Vec<Converted>
where
    P: AsRef<Path> + Sync,
{
    let listing = Listing::new(dialect, options);
    let convert = |path: &P| {
        let path = path.as_ref();
        Converted {
            path: path.to_path_buf(),
            result: listing.transform_file(path),
        }
    };

    if options.parallel {
        paths.par_iter().map(convert).collect()
    } else {
        paths.iter().map(convert).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_sources(dir: &Path) -> Vec<PathBuf> {
        let a = dir.join("a.go");
        let b = dir.join("b.go");
        fs::write(&a, "// Package a\npackage a\n").unwrap();
        fs::write(&b, "// Package b\npackage b\n").unwrap();
        vec![a, dir.join("missing.go"), b]
    }

    #[test]
    fn test_transform_str_markdown() {
        let options = ListingOptions::default().without_date();
        let markdown = transform_str("t.go", "// Title\nfunc main() {}\n", Dialect::Markdown, &options)
            .unwrap();
        assert_eq!(markdown, "## t.go\n\nTitle\n  \n\tfunc main() {}\n");
    }

    #[test]
    fn test_transform_reader() {
        let options = ListingOptions::default().without_date();
        let tex = transform_reader(
            "r.go",
            std::io::Cursor::new("x := 1\n"),
            Dialect::LatexVerbatim,
            &options,
        )
        .unwrap();
        assert!(tex.contains("\\begin{verbatim}\nx := 1\n\\end{verbatim}\n"));
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_sources(dir.path());
        let options = ListingOptions::default().without_date();

        let results = transform_files(&paths, Dialect::Markdown, &options);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].path, paths[0]);
        assert!(results[0].result.as_ref().unwrap().contains("Package a\n"));
        assert!(matches!(results[1].result, Err(Error::Io(_))));
        assert!(results[2].result.as_ref().unwrap().contains("\tpackage b\n"));
    }

    #[test]
    fn test_batch_sequential_matches_parallel() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_sources(dir.path());
        let parallel = ListingOptions::default().without_date();
        let sequential = parallel.clone().sequential();

        let a = transform_files(&paths, Dialect::LatexListing, &parallel);
        let b = transform_files(&paths, Dialect::LatexListing, &sequential);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.path, y.path);
            assert_eq!(x.result.as_ref().ok(), y.result.as_ref().ok());
        }
    }

    #[test]
    fn test_language_marker_end_to_end() {
        let marker = CommentMarker::for_language(Language::Python).unwrap();
        let options = ListingOptions::default().without_date().with_marker(marker);
        let markdown = transform_str(
            "inc.py",
            "# Increment\ndef inc(x):\n    return x + 1\n",
            Dialect::Markdown,
            &options,
        )
        .unwrap();
        assert!(markdown.ends_with("Increment\n  \n\tdef inc(x):\n\t    return x + 1\n"));
    }

    #[test]
    fn test_to_markdown_missing_file() {
        assert!(matches!(to_markdown("no/such/file.go"), Err(Error::Io(_))));
    }
}
