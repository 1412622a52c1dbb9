use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;
use crate::session::DEFAULT_REQUEST_TIMEOUT;
use crate::translation::{DEFAULT_SOURCE, Language, LanguageCatalog, validate_language};
use crate::ui::Style;

/// Provider used when neither the CLI nor the config file names one.
pub const BUILTIN_PROVIDER: &str = "github-models";

const BUILTIN_ENDPOINT: &str = "https://models.inference.ai.azure.com";
const BUILTIN_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Model used when nothing else selects one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default settings in the `[lingome]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LingomeConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default source language code.
    pub from: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
    /// Upper bound on a single translation request; `0` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

/// Configuration for a translation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Models known to work with this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The provider used out of the box.
    pub fn builtin() -> Self {
        Self {
            endpoint: BUILTIN_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: Some(BUILTIN_API_KEY_ENV.to_string()),
            models: vec![DEFAULT_MODEL.to_string()],
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingome/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub lingome: LingomeConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in one by name.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| (name == BUILTIN_PROVIDER).then(ProviderConfig::builtin))
    }

    /// Configured provider names plus the built-in one, sorted.
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        if !self.providers.contains_key(BUILTIN_PROVIDER) {
            names.push(BUILTIN_PROVIDER);
        }
        names.sort_unstable();
        names
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key (if available).
    pub api_key: Option<String>,
    /// Initial source language.
    pub source_language: &'static Language,
    /// Initial target language.
    pub target_language: &'static Language,
    /// Bound on each translation request.
    pub request_timeout: Option<Duration>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language code override.
    pub from: Option<String>,
    /// Target language code override.
    pub to: Option<String>,
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Request timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the provider is unknown or a language code is not
/// in the catalog.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.lingome.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| BUILTIN_PROVIDER.to_string());

    let Some(provider_config) = config_file.provider(&provider_name) else {
        bail!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/lingome/config.toml",
            config_file.provider_names().join("\n  - ")
        );
    };

    let model = options
        .model
        .as_ref()
        .or(config_file.lingome.model.as_ref())
        .or(provider_config.models.first())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        eprintln!(
            "{} Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let source_code = options
        .from
        .as_deref()
        .or(config_file.lingome.from.as_deref())
        .unwrap_or(DEFAULT_SOURCE);
    let source_language = validate_language(source_code)?;

    let target_language = match options.to.as_deref().or(config_file.lingome.to.as_deref()) {
        Some(code) => validate_language(code)?,
        None => LanguageCatalog::builtin()
            .default_target_for(source_language.code)
            .context("Language catalog is empty")?,
    };

    let timeout_secs = options
        .timeout_secs
        .or(config_file.lingome.timeout_secs)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT.as_secs());
    let request_timeout = (timeout_secs > 0).then_some(Duration::from_secs(timeout_secs));

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        eprintln!(
            "{} Provider '{provider_name}' expects an API key but none is set\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\
             Translations will fail until a key is available.\n",
            Style::warning("Warning:"),
        );
    }

    tracing::debug!(
        provider = %provider_name,
        model = %model,
        from = source_language.code,
        to = target_language.code,
        ?request_timeout,
        "configuration resolved"
    );

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint,
        model,
        api_key,
        source_language,
        target_language,
        request_timeout,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/lingome/config.toml`
    /// or `~/.config/lingome/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Uses an explicit config file location.
    pub fn with_path(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Reads the config file. A missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }

        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }
}
