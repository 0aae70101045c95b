//! User identity resolution
//!
//! The username is prompted once and cached in `user_config.json` beside
//! the configuration. A failed cache write is a warning, not fatal: the
//! in-memory name still drives the current run.

use std::fs;
use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::collect::Prompter;

/// Identity cache file name, resolved against the working directory
pub const IDENTITY_FILE: &str = "user_config.json";

#[derive(Debug, Serialize, Deserialize)]
struct UserIdentity {
    username: String,
}

/// Load the cached username, or prompt for one and cache it
pub fn resolve_username(path: &Path, prompter: &mut dyn Prompter) -> Result<String> {
    if let Some(username) = read_cached(path) {
        debug!(%username, "Loaded cached identity");
        return Ok(username);
    }

    let mut username = prompter.read_line("Enter your name (first run): ")?.trim().to_string();
    while username.is_empty() {
        username = prompter
            .read_line("Name cannot be empty, try again: ")?
            .trim()
            .to_string();
    }

    if let Err(e) = write_cache(path, &username) {
        warn!(
            "Failed to save identity to {}: {e}. The name will be asked again next run",
            path.display()
        );
    }

    Ok(username)
}

fn read_cached(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let identity: UserIdentity = serde_json::from_str(&content).ok()?;
    if identity.username.is_empty() {
        return None;
    }
    Some(identity.username)
}

fn write_cache(path: &Path, username: &str) -> Result<()> {
    let identity = UserIdentity {
        username: username.to_string(),
    };
    fs::write(path, serde_json::to_string_pretty(&identity)?)?;
    Ok(())
}
