use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::chat::MAX_HISTORY;
use crate::completion::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::error::ChatError;
use crate::paths;

/// Name of the required key in `config.json`.
pub const API_KEY_FIELD: &str = "OPENAI_API_KEY";

/// The configuration file structure.
///
/// Corresponds to `config.json`:
///
/// ```json
/// { "OPENAI_API_KEY": "sk-..." }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Secret key for the completion endpoint.
    #[serde(rename = "OPENAI_API_KEY", default)]
    pub openai_api_key: Option<String>,
}

impl ConfigFile {
    /// The API key, if present and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Runtime settings after merging CLI options with the config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to request completions from.
    pub model: String,
    /// The API key.
    pub api_key: String,
    /// Bound on retained conversation messages.
    pub max_history: usize,
}

/// CLI overrides applied on top of the config file and built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// API endpoint override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// History bound override.
    pub max_history: Option<usize>,
}

/// Merges CLI options with a loaded config file.
///
/// # Errors
///
/// Returns [`ChatError::ConfigIncomplete`] if the file has no usable API key.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
    config_path: &Path,
) -> Result<ResolvedConfig, ChatError> {
    let api_key = config_file
        .api_key()
        .ok_or_else(|| ChatError::ConfigIncomplete {
            path: config_path.to_path_buf(),
        })?
        .to_string();

    Ok(ResolvedConfig {
        endpoint: options
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        model: options
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        api_key,
        max_history: options.max_history.unwrap_or(MAX_HISTORY),
    })
}

/// Masks a secret for display, keeping a short prefix and suffix.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len().max(4));
    }

    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

/// Locates and loads `config.json`.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/gpt-chat/config.json`
    /// or `~/.config/gpt-chat/config.json` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self::with_path(paths::config_dir().join("config.json"))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Reads and parses the config file.
    ///
    /// A missing file and an unparseable file are reported as distinct errors.
    pub fn load(&self) -> Result<ConfigFile, ChatError> {
        let contents = fs::read_to_string(&self.config_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ChatError::ConfigMissing {
                path: self.config_path.clone(),
            },
            _ => ChatError::ConfigMalformed {
                path: self.config_path.clone(),
                reason: format!("failed to read file: {e}"),
            },
        })?;

        let config_file: ConfigFile =
            serde_json::from_str(&contents).map_err(|e| ChatError::ConfigMalformed {
                path: self.config_path.clone(),
                reason: e.to_string(),
            })?;

        info!(path = %self.config_path.display(), "Loaded configuration");
        Ok(config_file)
    }

    /// Loads the file and resolves it against `options` in one step.
    pub fn load_resolved(&self, options: &ResolveOptions) -> Result<ResolvedConfig, ChatError> {
        let config_file = self.load()?;
        resolve_config(options, &config_file, &self.config_path)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
