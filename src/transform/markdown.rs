//! Markdown listing markup.

use super::Markup;

/// Markdown output: prose as flowing text, code as tab-indented blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownMarkup;

impl Markup for MarkdownMarkup {
    fn header(&self, title: &str, timestamp: Option<&str>, out: &mut String) {
        out.push_str("## ");
        out.push_str(title);
        out.push('\n');
        match timestamp {
            Some(date) => {
                out.push_str("<small>");
                out.push_str(date);
                out.push_str("</small>\n\n");
            }
            None => out.push('\n'),
        }
    }

    // Some renderers only start an indented block after a hard break.
    fn open_code(&self, out: &mut String) {
        out.push_str("  \n");
    }

    fn close_code(&self, out: &mut String) {
        out.push('\n');
    }

    // An indented block ends with the document.
    fn flush_code(&self, _out: &mut String) {}

    fn code_line(&self, line: &str, out: &mut String) {
        out.push('\t');
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_date() {
        let mut out = String::new();
        MarkdownMarkup.header("lib.rs", None, &mut out);
        assert_eq!(out, "## lib.rs\n\n");
    }

    #[test]
    fn test_code_line_keeps_content() {
        let mut out = String::new();
        MarkdownMarkup.code_line("\tif err != nil {", &mut out);
        assert_eq!(out, "\t\tif err != nil {");
    }

    #[test]
    fn test_flush_is_silent() {
        let mut out = String::from("\tx\n");
        MarkdownMarkup.flush_code(&mut out);
        assert_eq!(out, "\tx\n");
    }
}
