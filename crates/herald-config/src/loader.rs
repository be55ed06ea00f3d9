use std::path::Path;

use secrecy::ExposeSecret;

use crate::{Config, TtsProviderConfig, WatsonTtsConfig};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        tracing::debug!(engines = config.tts.providers.len(), "configuration loaded");

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if no engine is configured or an engine has
    /// unusable settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tts.providers.is_empty() {
            anyhow::bail!("at least one TTS engine must be configured under [tts.providers]");
        }

        for (name, provider) in &self.tts.providers {
            match provider {
                TtsProviderConfig::Watson(watson) => validate_watson(name, watson)?,
            }
        }

        Ok(())
    }
}

fn validate_watson(name: &str, config: &WatsonTtsConfig) -> anyhow::Result<()> {
    if config.watson_apikey.expose_secret().trim().is_empty() {
        anyhow::bail!("tts engine '{name}': watson_apikey must not be empty");
    }

    if config.timeout.is_zero() {
        anyhow::bail!("tts engine '{name}': timeout must be greater than 0");
    }

    Ok(())
}
