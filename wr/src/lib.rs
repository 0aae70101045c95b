//! weekreport - interactive template-driven report generator
//!
//! Fills `{{placeholder}}` tokens in text templates from auto-derived
//! values (date, week, username) and interactive answers, offering each
//! user's previous answers as defaults. Rendered reports are plain text,
//! with optional PDF export through an external renderer.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration types and loading
//! - [`collect`] - Interactive input collection and auto-fill
//! - [`history`] - Per-user answer history
//! - [`identity`] - Username resolution and caching
//! - [`placeholder`] - Placeholder extraction
//! - [`render`] - Template substitution and report output
//! - [`selector`] - Interactive template selection
//! - [`pdf`] - Markdown -> HTML -> PDF export collaborator

pub mod cli;
pub mod collect;
pub mod config;
pub mod history;
pub mod identity;
pub mod pdf;
pub mod placeholder;
pub mod render;
pub mod selector;

// Re-export commonly used types
pub use collect::{CollectedInput, LinePrompter, Prompter, auto_fill_values, collect_inputs};
pub use config::{Config, TemplateSettings, UiSettings};
pub use history::{HistoryEntry, HistoryStore};
pub use pdf::{PdfError, PdfRenderer, markdown_to_html};
pub use placeholder::extract;
pub use selector::{TemplateChoice, list_templates, select_template};
