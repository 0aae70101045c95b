//! PDF export via an external renderer
//!
//! The report Markdown is converted to styled HTML in-process; turning that
//! HTML into a PDF is delegated to a `weasyprint` executable behind the
//! [`PdfRenderer`] capability trait. When no renderer is installed the
//! export degrades to a warning and only the text artifact is produced.

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};

use pulldown_cmark::{Options, Parser, html};
use thiserror::Error;
use tracing::debug;

/// Errors from the PDF collaborator
#[derive(Debug, Error)]
pub enum PdfError {
    /// No renderer installed; `hint` names the install command
    #[error("PDF renderer not available ({hint})")]
    Unavailable { hint: String },

    /// The renderer ran but did not produce a PDF
    #[error("PDF renderer failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability boundary for HTML -> PDF rendering
pub trait PdfRenderer {
    /// Render styled HTML to a PDF file at `output`
    fn render(&self, html: &str, output: &Path) -> Result<(), PdfError>;
}

/// Renderer shelling out to the `weasyprint` executable
pub struct WeasyPrintPdf;

impl WeasyPrintPdf {
    /// Probe for the executable; `None` when it is not installed
    pub fn detect() -> Option<Self> {
        let found = Command::new("weasyprint")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        debug!(found, "Probed for weasyprint");
        found.then_some(Self)
    }
}

impl PdfRenderer for WeasyPrintPdf {
    fn render(&self, html: &str, output: &Path) -> Result<(), PdfError> {
        // "-" reads the HTML document from stdin
        let mut child = Command::new("weasyprint")
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(html.as_bytes())?;
        }

        let out = child.wait_with_output()?;
        if !out.status.success() {
            return Err(PdfError::Failed(
                String::from_utf8_lossy(&out.stderr).trim().to_string(),
            ));
        }
        Ok(())
    }
}

/// The "not installed" variant of the capability
pub struct UnavailablePdf;

impl PdfRenderer for UnavailablePdf {
    fn render(&self, _html: &str, _output: &Path) -> Result<(), PdfError> {
        Err(PdfError::Unavailable {
            hint: "install it with: pip install weasyprint".to_string(),
        })
    }
}

/// Pick the best available renderer
pub fn detect_renderer() -> Box<dyn PdfRenderer> {
    match WeasyPrintPdf::detect() {
        Some(renderer) => Box::new(renderer),
        None => Box::new(UnavailablePdf),
    }
}

/// Convert report Markdown to a styled HTML document
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);

    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; margin: 40px; }}
    h1 {{ color: #2c3e50; border-bottom: 2px solid #eee; }}
    h2 {{ color: #34495e; margin-top: 20px; }}
    .section {{ margin: 15px 0; padding: 10px; background: #f9f9f9; }}
</style>
</head>
<body>
{body}</body>
</html>
"#
    )
}
