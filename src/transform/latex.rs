//! LaTeX listing markup.

use super::Markup;

const PREAMBLE: &str = r"\documentclass[11pt]{article}
\usepackage{parskip}
\setlength{\parindent}{0cm}
\usepackage[margin=0.75in]{geometry}
\usepackage{fancyvrb}
\usepackage[T1]{fontenc}
\usepackage{textcomp}
\usepackage{lmodern}
\usepackage[hidelinks]{hyperref}
\usepackage{graphicx}
\usepackage{amssymb}
\usepackage{listings}
\usepackage{framed}

";

/// Environment wrapped around each run of code lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatexEnvironment {
    /// `\begin{verbatim}` ... `\end{verbatim}`
    Verbatim,
    /// `\begin{lstlisting}[frame=single]` ... `\end{lstlisting}`
    Listing,
}

impl LatexEnvironment {
    fn begin(&self) -> &'static str {
        match self {
            LatexEnvironment::Verbatim => "\\begin{verbatim}",
            LatexEnvironment::Listing => "\\begin{lstlisting}[frame=single]",
        }
    }

    fn end(&self) -> &'static str {
        match self {
            LatexEnvironment::Verbatim => "\\end{verbatim}",
            LatexEnvironment::Listing => "\\end{lstlisting}",
        }
    }
}

/// LaTeX output: prose as paragraphs, code inside an environment.
#[derive(Debug, Clone, Copy)]
pub struct LatexMarkup {
    environment: LatexEnvironment,
}

impl LatexMarkup {
    pub const fn new(environment: LatexEnvironment) -> Self {
        Self { environment }
    }
}

impl Markup for LatexMarkup {
    fn header(&self, title: &str, timestamp: Option<&str>, out: &mut String) {
        out.push_str(PREAMBLE);
        out.push_str(&format!("\\title{{{}}}\n", escape_latex(title)));
        out.push_str("\\author{literate listing}\n");
        out.push_str(&format!(
            "\\date{{{}}}\n",
            timestamp.map(escape_latex).unwrap_or_default()
        ));
        out.push_str("\n\\begin{document}\n\\maketitle\n\n");
    }

    fn open_code(&self, out: &mut String) {
        out.push_str("\n\n");
        out.push_str(self.environment.begin());
        out.push('\n');
    }

    fn close_code(&self, out: &mut String) {
        out.push_str(self.environment.end());
        out.push_str("\n\n");
    }

    fn code_line(&self, line: &str, out: &mut String) {
        out.push_str(line);
    }

    fn footer(&self, out: &mut String) {
        out.push_str("\\end{document}\n");
    }
}

/// Escapes characters LaTeX treats specially in running text.
pub(crate) fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("my_file.go"), "my\\_file.go");
        assert_eq!(escape_latex("50% & $5"), "50\\% \\& \\$5");
        assert_eq!(escape_latex("C:\\src"), "C:\\textbackslash{}src");
        assert_eq!(escape_latex("plain.go"), "plain.go");
    }

    #[test]
    fn test_header_title_and_date() {
        let mut out = String::new();
        LatexMarkup::new(LatexEnvironment::Listing).header("a_b.go", Some("today"), &mut out);

        assert!(out.starts_with("\\documentclass[11pt]{article}\n"));
        assert!(out.contains("\\title{a\\_b.go}\n"));
        assert!(out.contains("\\date{today}\n"));
        assert!(out.ends_with("\\begin{document}\n\\maketitle\n\n"));
    }

    #[test]
    fn test_header_without_date_suppresses_it() {
        let mut out = String::new();
        LatexMarkup::new(LatexEnvironment::Verbatim).header("x.go", None, &mut out);
        assert!(out.contains("\\date{}\n"));
    }

    #[test]
    fn test_environments() {
        let mut out = String::new();
        let verbatim = LatexMarkup::new(LatexEnvironment::Verbatim);
        verbatim.open_code(&mut out);
        verbatim.close_code(&mut out);
        assert_eq!(out, "\n\n\\begin{verbatim}\n\\end{verbatim}\n\n");

        let listing = LatexMarkup::new(LatexEnvironment::Listing);
        let mut out = String::new();
        listing.flush_code(&mut out);
        assert_eq!(out, "\\end{lstlisting}\n\n");
    }
}
