//! Configuration file loading and runtime settings.

mod manager;

pub use manager::{
    API_KEY_FIELD, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, mask_api_key,
    resolve_config,
};
