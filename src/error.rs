//! Error types for litlist library.

use std::io;
use thiserror::Error;

/// Result type alias for litlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for litlist library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while opening, reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The comment marker does not compile into a valid pattern.
    #[error("Invalid comment line ({0})")]
    InvalidMarker(#[from] regex::Error),

    /// The output format keyword is not one of the supported formats.
    #[error("{0} is not a supported output format")]
    UnknownFormat(String),

    /// The language name has no known line comment.
    #[error("{0} isn't recognised as a language")]
    UnknownLanguage(String),

    /// The timestamp format string contains an invalid specifier.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// The external rendering tool could not be started.
    #[error("{0} could not be started; is it installed and on PATH?")]
    ToolNotFound(String),

    /// The external rendering tool ran but reported failure.
    #[error("{tool} exited with {status}: {output}")]
    Render {
        tool: String,
        status: String,
        output: String,
    },
}

impl Error {
    /// Returns true for errors that invalidate the whole run rather than
    /// a single file.
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            Error::InvalidMarker(_)
                | Error::UnknownFormat(_)
                | Error::UnknownLanguage(_)
                | Error::InvalidDateFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_classification() {
        assert!(Error::UnknownFormat("docx".into()).is_setup());
        assert!(Error::UnknownLanguage("cobol".into()).is_setup());
        assert!(Error::InvalidDateFormat("%Q".into()).is_setup());

        let io = Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_setup());
        assert!(!Error::ToolNotFound("pandoc".into()).is_setup());
    }

    #[test]
    fn test_render_error_carries_tool_output() {
        let err = Error::Render {
            tool: "pandoc".into(),
            status: "exit status: 43".into(),
            output: "! LaTeX Error: File `framed.sty' not found.".into(),
        };
        let message = err.to_string();
        assert!(message.starts_with("pandoc exited with exit status: 43"));
        assert!(message.contains("framed.sty"));
    }
}
