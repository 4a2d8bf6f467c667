//! Options for listing conversion and delivery.

use crate::error::{Error, Result};
use crate::marker::CommentMarker;
use crate::output::OutputFormat;
use crate::reader::DEFAULT_CAPACITY;
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use std::path::PathBuf;

/// Default strftime format for the listing date.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Options for controlling how source files become listings.
///
/// Built once per run and shared by reference between conversions.
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Pattern that marks documentation lines.
    pub marker: CommentMarker,

    /// strftime format for the header date. `None` leaves the date out.
    date_format: Option<String>,

    /// Fixed header date, used instead of the clock when set.
    timestamp: Option<String>,

    /// Buffer size for the line reader.
    pub reader_capacity: usize,

    /// Whether to convert batches in parallel.
    pub parallel: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            marker: CommentMarker::default(),
            date_format: Some(DEFAULT_DATE_FORMAT.to_string()),
            timestamp: None,
            reader_capacity: DEFAULT_CAPACITY,
            parallel: true,
        }
    }
}

impl ListingOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment marker.
    pub fn with_marker(mut self, marker: CommentMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the strftime format used for the header date.
    ///
    /// Fails with [`Error::InvalidDateFormat`] on an unknown specifier.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidDateFormat(format));
        }
        self.date_format = Some(format);
        Ok(self)
    }

    /// Uses a fixed header date instead of the current time.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Leaves the date out of listing headers.
    pub fn without_date(mut self) -> Self {
        self.date_format = None;
        self.timestamp = None;
        self
    }

    /// Sets the line reader's buffer size.
    pub fn with_reader_capacity(mut self, capacity: usize) -> Self {
        self.reader_capacity = capacity.max(1);
        self
    }

    /// Disables parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The header date for a conversion starting now.
    pub fn timestamp(&self) -> Option<String> {
        if let Some(ref fixed) = self.timestamp {
            return Some(fixed.clone());
        }
        self.date_format
            .as_ref()
            .map(|format| Local::now().format(format).to_string())
    }
}

/// Options for delivering finished listings.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Directory listing files are written to.
    pub output_dir: PathBuf,

    /// Where and how the listing ends up.
    pub format: OutputFormat,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::Stdout,
        }
    }
}

impl OutputOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ListingOptions::default();
        assert_eq!(options.marker.marker(), "//");
        assert!(options.parallel);
        assert!(options.timestamp().is_some());
    }

    #[test]
    fn test_fixed_timestamp_wins() {
        let options = ListingOptions::default().with_timestamp("1970-01-01");
        assert_eq!(options.timestamp().as_deref(), Some("1970-01-01"));
    }

    #[test]
    fn test_without_date() {
        let options = ListingOptions::default()
            .with_timestamp("ignored")
            .without_date();
        assert!(options.timestamp().is_none());
    }

    #[test]
    fn test_custom_date_format() {
        let options = ListingOptions::default().with_date_format("%Y").unwrap();
        let year = options.timestamp().unwrap();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_invalid_date_format() {
        match ListingOptions::default().with_date_format("%Y-%") {
            Err(Error::InvalidDateFormat(format)) => assert_eq!(format, "%Y-%"),
            other => panic!("expected InvalidDateFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_capacity_never_zero() {
        assert_eq!(ListingOptions::default().with_reader_capacity(0).reader_capacity, 1);
    }

    #[test]
    fn test_output_options_builder() {
        let options = OutputOptions::new()
            .with_output_dir("./listings")
            .with_format(OutputFormat::Markdown);
        assert_eq!(options.output_dir, PathBuf::from("./listings"));
        assert_eq!(options.format, OutputFormat::Markdown);
    }
}
