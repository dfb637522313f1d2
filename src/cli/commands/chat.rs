use anyhow::Result;
use std::path::PathBuf;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig};
use crate::error::ChatError;

pub struct ChatOptions {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub max_history: Option<usize>,
}

/// Loads the configuration without touching the terminal.
///
/// Configuration failures come back as fatal [`ChatError`]s so the caller can
/// stop before any chat UI is shown.
pub fn load_session_config(options: &ChatOptions) -> Result<ResolvedConfig, ChatError> {
    let manager = options
        .config
        .as_ref()
        .map_or_else(ConfigManager::new, ConfigManager::with_path);

    let resolve = ResolveOptions {
        endpoint: options.endpoint.clone(),
        model: options.model.clone(),
        max_history: options.max_history,
    };

    manager.load_resolved(&resolve)
}

pub async fn run_chat(config: ResolvedConfig) -> Result<()> {
    let mut session = ChatSession::new(config);
    session.run().await
}
