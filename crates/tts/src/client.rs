use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::{Result, TtsError},
    http_client::http_client,
};

/// Remote synthesis API consumed by an engine
///
/// Engines receive their client at construction so tests and hosts can
/// substitute their own transport.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    /// Synthesize `text` with `voice`, asking for audio encoded as `accept`
    async fn synthesize(&self, text: &str, accept: &str, voice: &str) -> Result<Vec<u8>>;
}

/// Client for the Watson `/v1/synthesize` endpoint
pub struct WatsonClient {
    client: Client,
    synthesize_url: Url,
    api_key: SecretString,
}

impl WatsonClient {
    /// Create a client for the service at `base_url`
    ///
    /// No request is made until the first synthesis.
    pub fn new(base_url: &Url, api_key: SecretString, timeout: Duration) -> Result<Self> {
        let synthesize_url = format!("{}/v1/synthesize", base_url.as_str().trim_end_matches('/'));
        let synthesize_url = Url::parse(&synthesize_url)
            .map_err(|e| TtsError::ConfigError(format!("invalid Watson URL '{base_url}': {e}")))?;

        Ok(Self {
            client: http_client(timeout)?,
            synthesize_url,
            api_key,
        })
    }
}

#[derive(serde::Serialize)]
struct WatsonSynthesizeRequest<'a> {
    text: &'a str,
}

#[async_trait]
impl SpeechClient for WatsonClient {
    async fn synthesize(&self, text: &str, accept: &str, voice: &str) -> Result<Vec<u8>> {
        tracing::debug!(voice, accept, input_len = text.len(), "Watson TTS request");

        let response = self
            .client
            .post(self.synthesize_url.clone())
            .basic_auth("apikey", Some(self.api_key.expose_secret()))
            .header(ACCEPT, accept)
            .query(&[("voice", voice)])
            .json(&WatsonSynthesizeRequest { text })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Watson TTS request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to Watson: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Watson TTS API error ({status}): {error_text}");

            return Err(TtsError::from_status(status.as_u16(), error_text));
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read Watson TTS response body: {e}");
            TtsError::ConnectionError(format!("Failed to read Watson response: {e}"))
        })?;

        tracing::debug!("Watson TTS synthesis complete, {} bytes", audio.len());

        Ok(audio.to_vec())
    }
}
