//! Logical line reading.
//!
//! [`LineReader`] reads through a fixed-size buffer. A line longer than the
//! buffer comes off the underlying reader as several fragments; the reader
//! joins them again so callers only ever see whole lines.

use crate::error::Result;
use std::io::{self, BufRead, BufReader, Read};

/// Default buffer size, matching the usual page-sized read.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Outcome of a single buffered read.
enum Fragment {
    /// The buffer filled up before a newline was seen.
    Partial,
    /// A newline terminated the fragment.
    Complete,
    /// No bytes were left.
    Eof,
}

/// Supplies one logical line at a time, terminator removed.
pub struct LineReader<R> {
    inner: BufReader<R>,
    finished: bool,
}

impl<R: Read> LineReader<R> {
    /// Creates a reader with the default buffer size.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Creates a reader whose buffer holds `capacity` bytes.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity.max(1), inner),
            finished: false,
        }
    }

    /// Returns the next line, or `None` at a clean end of input.
    ///
    /// `\n` and `\r\n` terminators are stripped. A trailing line without
    /// a terminator is still returned. Invalid UTF-8 is replaced lossily.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }

        let mut line = Vec::new();
        let mut fragments = 0usize;
        loop {
            match self.read_fragment(&mut line)? {
                Fragment::Complete => break,
                Fragment::Partial => fragments += 1,
                Fragment::Eof => {
                    if line.is_empty() {
                        self.finished = true;
                        return Ok(None);
                    }
                    break;
                }
            }
        }

        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if fragments > 0 {
            tracing::trace!(fragments, bytes = line.len(), "reassembled long line");
        }

        Ok(Some(match String::from_utf8(line) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }))
    }

    fn read_fragment(&mut self, line: &mut Vec<u8>) -> io::Result<Fragment> {
        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(Fragment::Eof);
            }

            return match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    self.inner.consume(end + 1);
                    Ok(Fragment::Complete)
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.inner.consume(len);
                    Ok(Fragment::Partial)
                }
            };
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_line() {
            Ok(line) => line.map(Ok),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
