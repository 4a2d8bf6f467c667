//! Async API for non-blocking listing conversion.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! litlist = { version = "0.1", features = ["async"] }
//! ```

use crate::error::{Error, Result};
use crate::options::ListingOptions;
use crate::transform::Dialect;
use std::io::Cursor;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Asynchronously converts a file to a listing.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> litlist::Result<()> {
/// use litlist::{Dialect, ListingOptions};
///
/// let options = ListingOptions::default();
/// let markdown = litlist::async_api::transform_file("main.go", Dialect::Markdown, &options).await?;
/// tokio::fs::write("main.go.md", markdown).await?;
/// # Ok(())
/// # }
/// ```
pub async fn transform_file(
    path: impl AsRef<Path>,
    dialect: Dialect,
    options: &ListingOptions,
) -> Result<String> {
    let path = path.as_ref();
    let data = fs::read(path).await?;
    transform_bytes(path.display().to_string(), data, dialect, options).await
}

/// Asynchronously converts source read from an async reader.
pub async fn transform_reader<R: AsyncRead + Unpin>(
    title: impl Into<String>,
    mut reader: R,
    dialect: Dialect,
    options: &ListingOptions,
) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    transform_bytes(title.into(), data, dialect, options).await
}

async fn transform_bytes(
    title: String,
    data: Vec<u8>,
    dialect: Dialect,
    options: &ListingOptions,
) -> Result<String> {
    // The transform is CPU-bound, so it runs on the blocking pool
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        crate::transform_reader(&title, Cursor::new(data), dialect, &options)
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transform_reader() {
        let options = ListingOptions::default().without_date();
        let source: &[u8] = b"// Hello\nfn main() {}\n";

        let markdown = transform_reader("main.rs", source, Dialect::Markdown, &options)
            .await
            .unwrap();

        assert_eq!(markdown, "## main.rs\n\nHello\n  \n\tfn main() {}\n");
    }

    #[tokio::test]
    async fn test_transform_missing_file() {
        let options = ListingOptions::default();
        let result = transform_file("no/such/file.go", Dialect::Markdown, &options).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
