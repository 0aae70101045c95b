//! Report generator CLI entry point
//!
//! Sequential workflow: configuration -> directories -> identity ->
//! template selection -> input collection -> history persistence ->
//! render -> optional PDF export.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use weekreport::cli::Cli;
use weekreport::collect::{self, LinePrompter};
use weekreport::config::Config;
use weekreport::history::HistoryStore;
use weekreport::identity;
use weekreport::pdf::{self, PdfError};
use weekreport::placeholder;
use weekreport::render;
use weekreport::selector;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Interactive tool: keep the terminal quiet unless asked otherwise
    let level = match cli_log_level {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{s}', defaulting to WARN");
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref());

    // --pdf forces PDF export for this run only
    if cli.pdf {
        config.export_pdf = true;
    }

    config
        .ensure_directories()
        .context("Failed to create working directories")?;

    let mut prompter = LinePrompter::new()?;

    run_generate(&config, &cli, &mut prompter)
}

fn run_generate(config: &Config, cli: &Cli, prompter: &mut LinePrompter) -> Result<()> {
    let username = identity::resolve_username(Path::new(identity::IDENTITY_FILE), prompter)?;
    info!(%username, "Identity resolved");

    let mut history = HistoryStore::load(&config.history_file);

    // Template: explicit flag or interactive selection
    let template_path = match &cli.template {
        Some(path) => path.clone(),
        None => match selector::select_template(config, prompter)? {
            Some(path) => path,
            None => {
                eprintln!(
                    "{} No templates found under {}/",
                    "error:".red().bold(),
                    config.templates_dir
                );
                process::exit(1);
            }
        },
    };

    let template_text = fs::read_to_string(&template_path)
        .context(format!("Failed to read template {}", template_path.display()))?;

    let template_stem = template_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("template")
        .to_string();

    let placeholders = placeholder::extract(&template_text);
    debug!(count = placeholders.len(), template = %template_stem, "Placeholders extracted");

    let input = collect::collect_inputs(&placeholders, &username, &template_stem, config, &history, prompter)?;

    // Persist the prompted answers for next time; a failed write loses the
    // update but never the current run
    history.record(&username, &template_stem, input.manual.clone(), &collect::today(&config.date_format));
    if let Err(e) = history.save() {
        warn!("Failed to save history: {e}. Previous answers will not be offered next run");
    }

    let rendered = render::render(&template_text, &input.values);

    let output_path = match &cli.output {
        Some(path) => path.clone(),
        None => PathBuf::from(&config.reports_dir).join(render::default_filename(&username, &config.file_format)),
    };

    render::write_report(&output_path, &rendered)?;
    println!(
        "\n{} Report written: {}",
        "✓".green(),
        output_path.display().to_string().cyan()
    );

    if config.export_pdf {
        export_pdf(&rendered, &output_path);
    }

    Ok(())
}

/// Best-effort PDF export; a missing renderer only skips the PDF artifact
fn export_pdf(rendered: &str, output_path: &Path) {
    let pdf_path = output_path.with_extension("pdf");
    let html = pdf::markdown_to_html(rendered);

    match pdf::detect_renderer().render(&html, &pdf_path) {
        Ok(()) => println!("{} PDF written: {}", "✓".green(), pdf_path.display()),
        Err(PdfError::Unavailable { hint }) => {
            warn!("PDF export skipped: no renderer installed ({hint})");
            println!("{} PDF skipped: no renderer installed ({hint})", "!".yellow());
        }
        Err(e) => {
            warn!("PDF export failed: {e}");
            println!("{} PDF export failed: {e}", "✗".red());
        }
    }
}
