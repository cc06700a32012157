//! src/config.rs
//! ============================================================================
//! # Config: User Overrides for the Command Catalog
//!
//! Loads and saves per-command overrides as TOML from the proper
//! cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate. Each `[commands.<ID>]`
//! table may override the label, the shortcut list and the initial enabled
//! state of one builtin command:
//!
//! ```toml
//! [commands.SAVE_DOCUMENT_COMMAND]
//! label = "Salvar"
//! shortcuts = ["ctrl+s"]
//!
//! [commands.HELP_COMMAND]
//! enabled = false
//! ```
//!
//! Missing file means defaults (no overrides); the default file is written
//! out on first load so users have something to edit.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::catalog::CommandId;

/// Overrides for a single command. All fields optional; absent fields keep
/// the catalog value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOverride {
    pub label: Option<String>,
    pub shortcuts: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

/// User-editable command configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Keyed by command id string form (e.g. `"UNDO_COMMAND"`). Kept as
    /// strings so an unknown id in the file deserializes cleanly and can be
    /// reported instead of failing the whole load.
    #[serde(default)]
    pub commands: HashMap<String, CommandOverride>,
}

impl CommandConfig {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or returns (and writes) defaults when no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let path: PathBuf = Self::config_path()?;

        if path.exists() {
            info!("Loading command config from {}", path.display());
            let text: String = fs::read_to_string(&path)?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No command config found at {}, using defaults. Creating it now.",
                path.display()
            );

            let default_config: Self = Self::default();
            default_config.save()?;

            Ok(default_config)
        }
    }

    /// Saves config to the TOML file at the XDG-compliant app config dir.
    pub fn save(&self) -> anyhow::Result<()> {
        let path: PathBuf = Self::config_path()?;

        info!("Saving command config to {}", path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str: String = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)?;

        Ok(())
    }

    /// Parse a config from TOML text. Used by `load` and by tests.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "mindmaps", "MindmapEditor")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().join("commands.toml"))
    }

    /// Override for one command, if the file has an entry for it.
    #[must_use]
    pub fn get(&self, id: CommandId) -> Option<&CommandOverride> {
        self.commands.get(id.as_str())
    }

    /// Set the override for a command.
    pub fn set(&mut self, id: CommandId, over: CommandOverride) {
        self.commands.insert(id.as_str().to_string(), over);
    }

    /// Set an override under a raw string key, valid or not. The registry
    /// warns about keys that name no builtin command.
    pub fn set_raw(&mut self, key: &str, over: CommandOverride) {
        self.commands.insert(key.to_string(), over);
    }

    /// All raw override keys present in the file.
    pub fn command_keys(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}
