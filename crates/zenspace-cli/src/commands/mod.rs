pub mod compare;
pub mod config;
pub mod info;
pub mod mask;
pub mod request;

use std::path::Path;

use anyhow::{Context, Result};
use zenspace_core::config::EditorConfig;

/// Load the editor config from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}
