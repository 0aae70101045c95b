//! Chart rendering collaborator
//!
//! Images are produced by an external python3 + matplotlib process when one
//! is installed; otherwise the Null renderer declines and the analyzer
//! emits its Markdown report without images.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Errors from the chart collaborator
#[derive(Debug, Error)]
pub enum ChartError {
    /// No renderer installed; `hint` names the install command
    #[error("chart renderer not available ({hint})")]
    Unavailable { hint: String },

    /// The renderer ran but did not produce an image
    #[error("chart renderer failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability boundary for chart/image rendering
pub trait ChartRenderer {
    /// Line chart over (label, value) points
    fn trend_chart(&self, points: &[(String, usize)], output: &Path) -> Result<(), ChartError>;

    /// Image summarizing a word frequency table
    fn word_cloud(&self, freq: &[(String, usize)], output: &Path) -> Result<(), ChartError>;
}

/// Renderer shelling out to python3 + matplotlib
pub struct MatplotlibChart;

impl MatplotlibChart {
    /// Probe for python3 with matplotlib importable
    pub fn detect() -> Option<Self> {
        let found = Command::new("python3")
            .args(["-c", "import matplotlib"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        debug!(found, "Probed for python3 + matplotlib");
        found.then_some(Self)
    }

    fn run_script(&self, script: &str) -> Result<(), ChartError> {
        let out = Command::new("python3")
            .args(["-c", script])
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if !out.status.success() {
            return Err(ChartError::Failed(
                String::from_utf8_lossy(&out.stderr).trim().to_string(),
            ));
        }
        Ok(())
    }
}

impl ChartRenderer for MatplotlibChart {
    fn trend_chart(&self, points: &[(String, usize)], output: &Path) -> Result<(), ChartError> {
        self.run_script(&trend_script(points, output))
    }

    fn word_cloud(&self, freq: &[(String, usize)], output: &Path) -> Result<(), ChartError> {
        self.run_script(&word_cloud_script(freq, output))
    }
}

/// The "not installed" variant of the capability
pub struct NullChart;

impl ChartRenderer for NullChart {
    fn trend_chart(&self, _points: &[(String, usize)], _output: &Path) -> Result<(), ChartError> {
        Err(ChartError::Unavailable {
            hint: "install it with: pip install matplotlib".to_string(),
        })
    }

    fn word_cloud(&self, _freq: &[(String, usize)], _output: &Path) -> Result<(), ChartError> {
        Err(ChartError::Unavailable {
            hint: "install it with: pip install matplotlib".to_string(),
        })
    }
}

/// Pick the best available renderer
pub fn detect_renderer() -> Box<dyn ChartRenderer> {
    match MatplotlibChart::detect() {
        Some(renderer) => Box::new(renderer),
        None => Box::new(NullChart),
    }
}

// JSON arrays and strings are valid Python literals, so the data can be
// spliced straight into the generated scripts.
fn py_list_str(items: &[&str]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

fn py_list_num(items: &[usize]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

fn py_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn trend_script(points: &[(String, usize)], output: &Path) -> String {
    let labels: Vec<&str> = points.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<usize> = points.iter().map(|(_, value)| *value).collect();

    format!(
        r#"import matplotlib
matplotlib.use("Agg")
import matplotlib.pyplot as plt
labels = {labels}
values = {values}
plt.figure(figsize=(12, 6))
plt.plot(labels, values, marker="o")
plt.title("Report length trend")
plt.xticks(rotation=45)
plt.tight_layout()
plt.savefig({output})
"#,
        labels = py_list_str(&labels),
        values = py_list_num(&values),
        output = py_str(&output.to_string_lossy()),
    )
}

fn word_cloud_script(freq: &[(String, usize)], output: &Path) -> String {
    let words: Vec<&str> = freq.iter().map(|(word, _)| word.as_str()).collect();
    let counts: Vec<usize> = freq.iter().map(|(_, count)| *count).collect();

    format!(
        r#"import matplotlib
matplotlib.use("Agg")
import matplotlib.pyplot as plt
words = {words}
counts = {counts}
plt.figure(figsize=(10, 5))
plt.barh(words[::-1], counts[::-1])
plt.title("Top words")
plt.tight_layout()
plt.savefig({output})
"#,
        words = py_list_str(&words),
        counts = py_list_num(&counts),
        output = py_str(&output.to_string_lossy()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_null_renderer_declines_with_hint() {
        let err = NullChart
            .trend_chart(&[], Path::new("trend.png"))
            .unwrap_err();

        match err {
            ChartError::Unavailable { hint } => assert!(hint.contains("matplotlib")),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_trend_script_embeds_data() {
        let points = vec![("2024-01-07".to_string(), 120), ("2024-01-14".to_string(), 80)];
        let script = trend_script(&points, &PathBuf::from("statistics/trend_chart.png"));

        assert!(script.contains(r#"["2024-01-07","2024-01-14"]"#));
        assert!(script.contains("[120,80]"));
        assert!(script.contains(r#""statistics/trend_chart.png""#));
    }

    #[test]
    fn test_word_cloud_script_embeds_data() {
        let freq = vec![("design".to_string(), 8), ("review".to_string(), 2)];
        let script = word_cloud_script(&freq, &PathBuf::from("word_cloud.png"));

        assert!(script.contains(r#"["design","review"]"#));
        assert!(script.contains("[8,2]"));
    }

    #[test]
    fn test_scripts_quote_awkward_paths() {
        let script = trend_script(&[], &PathBuf::from("dir with spaces/t.png"));
        assert!(script.contains(r#""dir with spaces/t.png""#));
    }
}
