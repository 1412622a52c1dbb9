//! Configuration file loading and CLI/file/default resolution.

mod manager;

pub use manager::{
    BUILTIN_PROVIDER, ConfigFile, ConfigManager, DEFAULT_MODEL, LingomeConfig, ProviderConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
