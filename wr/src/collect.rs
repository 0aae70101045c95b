//! Interactive input collection
//!
//! Reserved fields (date, week, username) are filled automatically and are
//! never prompted nor persisted. Every other placeholder is asked
//! interactively in template order, offering the user's previous answer for
//! this template as a default; empty input accepts the default, and a field
//! with no default must be answered with something non-empty.

use std::collections::BTreeMap;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use crate::config::Config;
use crate::history::HistoryStore;

/// Reserved auto-fill field names
pub const AUTO_DATE: &str = "date";
pub const AUTO_WEEK: &str = "week";
pub const AUTO_USERNAME: &str = "username";

/// Line-oriented input source, swappable in tests
pub trait Prompter {
    /// Read one line of input after displaying `prompt`
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// rustyline-backed prompter with line editing and history
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {e}"))?;
        Ok(Self { editor })
    }
}

impl Prompter for LinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            // Ctrl+C / Ctrl+D abort the run; no partial history is written
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(eyre::eyre!("Input aborted")),
            Err(e) => Err(eyre::eyre!("Readline error: {e}")),
        }
    }
}

/// Today formatted with the configured date format
///
/// An invalid format string falls back to ISO dates with a warning instead
/// of failing the run.
pub fn today(date_format: &str) -> String {
    format_date(&Local::now(), date_format)
}

fn format_date(now: &DateTime<Local>, fmt: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!("Invalid date_format {fmt:?}, falling back to %Y-%m-%d");
        return now.format("%Y-%m-%d").to_string();
    }
    now.format_with_items(items.into_iter()).to_string()
}

/// Values computed without prompting
pub fn auto_fill_values(username: &str, date_format: &str) -> BTreeMap<String, String> {
    let now = Local::now();
    let week: u32 = now.format("%W").to_string().parse().unwrap_or(0);

    BTreeMap::from([
        (AUTO_DATE.to_string(), format_date(&now, date_format)),
        (AUTO_WEEK.to_string(), format!("Week {week}")),
        (AUTO_USERNAME.to_string(), username.to_string()),
    ])
}

/// Result of collecting inputs: everything needed to render, plus the
/// manual subset that goes to history
#[derive(Debug)]
pub struct CollectedInput {
    /// Value for every placeholder, auto-filled ones included
    pub values: BTreeMap<String, String>,

    /// Only the prompted fields; this is what history persists
    pub manual: BTreeMap<String, String>,
}

/// Collect a value for every placeholder, in template order
pub fn collect_inputs(
    placeholders: &[String],
    username: &str,
    template_stem: &str,
    config: &Config,
    history: &HistoryStore,
    prompter: &mut dyn Prompter,
) -> Result<CollectedInput> {
    let auto = auto_fill_values(username, &config.date_format);
    let mut values = BTreeMap::new();
    let mut manual = BTreeMap::new();

    for name in placeholders {
        if let Some(value) = auto.get(name) {
            println!("{} {}: {}", "auto".dimmed(), name.cyan(), value);
            values.insert(name.clone(), value.clone());
            continue;
        }

        let last = history
            .last_value(username, template_stem, name)
            .map(str::to_string);

        let prompt = match &last {
            Some(prev) => format!("Enter {} [{}]: ", name.cyan(), prev.dimmed()),
            None => format!("Enter {}: ", name.cyan()),
        };

        loop {
            let input = prompter.read_line(&prompt)?;
            let input = input.trim();

            // Empty input accepts the previous answer when there is one
            let value = if input.is_empty() {
                last.clone().unwrap_or_default()
            } else {
                input.to_string()
            };

            if value.is_empty() {
                println!("{} {} cannot be empty", "error:".red(), name);
                continue;
            }

            values.insert(name.clone(), value.clone());
            manual.insert(name.clone(), value);
            break;
        }
    }

    debug!(
        total = values.len(),
        manual = manual.len(),
        "Input collection complete"
    );
    Ok(CollectedInput { values, manual })
}

#[cfg(test)]
pub mod test_support {
    use super::Prompter;
    use eyre::Result;
    use std::collections::VecDeque;

    /// Prompter fed from a fixed script of answers
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            self.answers
                .pop_front()
                .ok_or_else(|| eyre::eyre!("Scripted prompter ran out of answers"))
        }
    }
}
