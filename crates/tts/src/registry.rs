use herald_config::TtsProviderConfig;

use crate::{
    error::TtsError,
    provider::{TtsProvider, watson::WatsonTtsProvider},
    types::{SpeechAudio, SpeechRequest},
};

/// Configured TTS engines, in configuration order
pub struct Registry {
    providers: Vec<Box<dyn TtsProvider>>,
}

impl Registry {
    /// Registry over already-built engines
    pub fn from_providers(providers: Vec<Box<dyn TtsProvider>>) -> Self {
        Self { providers }
    }

    /// Engine registered under `name`
    pub fn provider(&self, name: &str) -> Option<&dyn TtsProvider> {
        self.providers.iter().find(|p| p.name() == name).map(Box::as_ref)
    }

    /// Names of all registered engines
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.name())
    }

    /// Synthesize a request with the engine it names
    ///
    /// Requests that name no engine go to the first configured one.
    pub async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechAudio> {
        let provider = match request.engine.as_deref() {
            Some(name) => self
                .provider(name)
                .ok_or_else(|| TtsError::ProviderNotFound(name.to_string()))?,
            None => self
                .providers
                .first()
                .map(Box::as_ref)
                .ok_or_else(|| TtsError::ProviderNotFound("No TTS engines configured".to_string()))?,
        };

        tracing::debug!(engine = provider.name(), input_len = request.message.len(), "TTS synthesis requested");

        provider
            .synthesize(&request.message, request.language.as_deref(), request.options.as_ref())
            .await
    }
}

/// Builder for constructing the registry from configuration
pub struct RegistryBuilder<'a> {
    config: &'a herald_config::Config,
}

impl<'a> RegistryBuilder<'a> {
    pub const fn new(config: &'a herald_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Registry> {
        let mut providers: Vec<Box<dyn TtsProvider>> = Vec::new();

        for (name, provider_config) in &self.config.tts.providers {
            tracing::debug!("Initializing TTS engine: {name}");

            let provider: Box<dyn TtsProvider> = match provider_config {
                TtsProviderConfig::Watson(watson) => {
                    Box::new(WatsonTtsProvider::from_config(name.clone(), watson)?)
                }
            };

            providers.push(provider);
        }

        if providers.is_empty() {
            tracing::debug!("No TTS engines configured");
        } else {
            tracing::debug!("TTS registry initialized with {} engine(s)", providers.len());
        }

        Ok(Registry { providers })
    }
}
