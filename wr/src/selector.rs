//! Template selection
//!
//! Templates are declared in configuration; only entries whose backing file
//! exists on disk are offered. Selection shows a numbered menu, previews
//! the chosen template in full, and requires a y/n confirmation before
//! committing; declining returns to the menu.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::{Context, Result};
use tracing::debug;

use crate::collect::Prompter;
use crate::config::Config;

/// One selectable template
#[derive(Debug, Clone)]
pub struct TemplateChoice {
    pub path: PathBuf,
    pub name: String,
    pub description: String,
}

/// List configured templates whose backing file exists on disk
pub fn list_templates(config: &Config) -> Vec<TemplateChoice> {
    let templates_dir = Path::new(&config.templates_dir);
    let mut choices = Vec::new();

    for settings in config.template_settings.values() {
        let path = templates_dir.join(&settings.default_template);
        if path.exists() {
            choices.push(TemplateChoice {
                path,
                name: settings.name.clone(),
                description: settings.description.clone(),
            });
        } else {
            debug!(path = %path.display(), "Configured template missing on disk");
        }
    }

    choices
}

/// Interactively pick a template
///
/// Returns `None` when no templates exist at all; the caller treats that as
/// fatal. An unreadable template file during preview is an error (fatal),
/// not a menu retry.
pub fn select_template(config: &Config, prompter: &mut dyn Prompter) -> Result<Option<PathBuf>> {
    let choices = list_templates(config);
    if choices.is_empty() {
        return Ok(None);
    }

    loop {
        println!();
        println!("{}", "Available templates:".bold());
        for (i, choice) in choices.iter().enumerate() {
            println!("{}. {}", i + 1, choice.name.cyan());
            println!("   {}", choice.description.dimmed());
        }

        let input = prompter.read_line("\nSelect a template (number): ")?;
        let selected = match input.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= choices.len() => &choices[n - 1],
            _ => {
                println!("{}", "Invalid selection, try again.".yellow());
                continue;
            }
        };

        if preview_template(&selected.path, config, prompter)? {
            return Ok(Some(selected.path.clone()));
        }
        // Declined: back to the menu
    }
}

/// Show the full template between separator rules and ask for confirmation
fn preview_template(path: &Path, config: &Config, prompter: &mut dyn Prompter) -> Result<bool> {
    let content = fs::read_to_string(path).context(format!("Failed to read template {}", path.display()))?;

    let separator = config.ui_settings.preview_separator.repeat(50);
    println!("\n{separator}");
    println!("{:^50}", "Template preview");
    println!("{separator}");
    println!("{content}");
    println!("{separator}");

    loop {
        let answer = prompter.read_line("\nUse this template? (y/n): ")?;
        match answer.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Please answer y or n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::test_support::ScriptedPrompter;
    use crate::config::TemplateSettings;
    use tempfile::TempDir;

    fn config_with_templates(temp: &TempDir, entries: &[(&str, &str, bool)]) -> Config {
        let templates_dir = temp.path().join("templates");
        fs::create_dir_all(&templates_dir).unwrap();

        let mut config = Config {
            templates_dir: templates_dir.to_string_lossy().into_owned(),
            ..Config::default()
        };

        for (key, file, on_disk) in entries {
            if *on_disk {
                fs::write(templates_dir.join(file), format!("{key} template body")).unwrap();
            }
            config.template_settings.insert(
                key.to_string(),
                TemplateSettings {
                    default_template: file.to_string(),
                    name: format!("{key} report"),
                    description: format!("the {key} one"),
                },
            );
        }

        config
    }

    #[test]
    fn test_list_filters_missing_files() {
        let temp = TempDir::new().unwrap();
        let config = config_with_templates(&temp, &[("weekly", "weekly.txt", true), ("monthly", "monthly.txt", false)]);

        let choices = list_templates(&config);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].name, "weekly report");
    }

    #[test]
    fn test_no_templates_returns_none() {
        let temp = TempDir::new().unwrap();
        let config = config_with_templates(&temp, &[("weekly", "weekly.txt", false)]);

        let mut prompter = ScriptedPrompter::new(&[]);
        let selected = select_template(&config, &mut prompter).unwrap();
        assert!(selected.is_none());
    }

    #[test]
    fn test_select_and_confirm() {
        let temp = TempDir::new().unwrap();
        let config = config_with_templates(&temp, &[("weekly", "weekly.txt", true)]);

        let mut prompter = ScriptedPrompter::new(&["1", "y"]);
        let selected = select_template(&config, &mut prompter).unwrap().unwrap();
        assert!(selected.ends_with("weekly.txt"));
    }

    #[test]
    fn test_decline_returns_to_menu() {
        let temp = TempDir::new().unwrap();
        let config = config_with_templates(&temp, &[("weekly", "weekly.txt", true)]);

        let mut prompter = ScriptedPrompter::new(&["1", "n", "1", "y"]);
        let selected = select_template(&config, &mut prompter).unwrap();
        assert!(selected.is_some());
    }

    #[test]
    fn test_invalid_selection_retries() {
        let temp = TempDir::new().unwrap();
        let config = config_with_templates(&temp, &[("weekly", "weekly.txt", true)]);

        let mut prompter = ScriptedPrompter::new(&["oops", "9", "0", "1", "maybe", "y"]);
        let selected = select_template(&config, &mut prompter).unwrap();
        assert!(selected.is_some());
    }
}
