//! Report rendering and output
//!
//! Rendering is literal substitution: every `{{name}}` occurrence is
//! replaced by its value, repeated occurrences included. Tokens with no
//! value are left verbatim; the normal workflow makes that unreachable
//! because collection covers every extracted placeholder.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use eyre::{Context, Result};
use tracing::debug;

/// Substitute every field value into the template text
pub fn render(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

/// Write the rendered report, creating parent directories as needed
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context(format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, content).context(format!("Failed to write report {}", path.display()))?;

    debug!(path = %path.display(), bytes = content.len(), "Report written");
    Ok(())
}

/// Default output file name: `{username}_weekly_{YYYYMMDD}{ext}`
pub fn default_filename(username: &str, file_format: &str) -> String {
    format!("{username}_weekly_{}{file_format}", Local::now().format("%Y%m%d"))
}
