//! Rendering through the `pandoc` command.

use super::{RenderRequest, Renderer};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// LaTeX template used for PDF output.
pub const PDF_TEMPLATE: &str = include_str!("pdf_template.latex");

const TEMP_PREFIX: &str = "litlist_pandoc";

/// Renders markdown listings by running pandoc.
#[derive(Debug, Clone)]
pub struct Pandoc {
    program: String,
    temp_dir: Option<PathBuf>,
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::with_program("pandoc")
    }
}

impl Pandoc {
    /// Uses a different executable, e.g. an absolute path to pandoc.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            temp_dir: None,
        }
    }

    /// Creates the intermediate markup and template files in `dir`
    /// instead of the system temporary directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Writes `contents` to a fresh temporary file. The file is removed
    /// when the handle drops.
    fn temp_file(&self, suffix: &str, contents: &str) -> io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(suffix);
        let mut file = match self.temp_dir {
            Some(ref dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn command(
        &self,
        output: &Path,
        source: &Path,
        template: Option<&Path>,
        request: &RenderRequest<'_>,
    ) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-o").arg(output);
        if request.standalone {
            command.arg("-s");
        }
        if request.listings {
            command.arg("--listings");
        }
        if let Some(template) = template {
            command.arg("--template").arg(template);
        }
        if let Some(title) = request.title {
            let mut meta = OsString::from("pagetitle=");
            meta.push(title);
            command.arg("-M").arg(meta);
        }
        command.arg(source);
        command
    }
}

impl Renderer for Pandoc {
    fn render(&self, markup: &str, output: &Path, request: &RenderRequest<'_>) -> Result<()> {
        let source = self.temp_file(".md", markup)?;
        let template = request
            .template
            .map(|text| self.temp_file(".latex", text))
            .transpose()?;

        let mut command = self.command(
            output,
            source.path(),
            template.as_ref().map(|t| t.path()),
            request,
        );

        tracing::debug!(program = %self.program, ?command, "running renderer");
        let result = command.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ToolNotFound(self.program.clone()),
            _ => Error::Io(e),
        })?;

        if !result.status.success() {
            let mut captured = String::from_utf8_lossy(&result.stdout).into_owned();
            captured.push_str(&String::from_utf8_lossy(&result.stderr));
            tracing::debug!(program = %self.program, status = %result.status, output = %captured, "renderer failed");
            return Err(Error::Render {
                tool: self.program.clone(),
                status: result.status.to_string(),
                output: captured.trim().to_string(),
            });
        }

        Ok(())
    }
}
