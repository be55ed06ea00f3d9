#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod http_client;
mod provider;
mod registry;
mod types;

use std::sync::Arc;

pub use client::{SpeechClient, WatsonClient};
pub use error::{Result, TtsError};
pub use provider::{TtsProvider, VOICE_OPTION, watson::WatsonTtsProvider};
pub use registry::{Registry, RegistryBuilder};
pub use types::{SpeechAudio, SpeechOptions, SpeechRequest};

/// Build the engine registry from configuration
pub fn build_registry(config: &herald_config::Config) -> anyhow::Result<Arc<Registry>> {
    let registry = Arc::new(
        RegistryBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS engines: {e}"))?,
    );
    Ok(registry)
}
