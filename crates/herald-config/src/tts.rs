use std::{num::NonZeroU32, time::Duration};

use indexmap::IndexMap;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::catalog::{OutputFormat, Voice};

/// Public Watson text-to-speech endpoint
pub const DEFAULT_WATSON_URL: &str = "https://stream.watsonplatform.net/text-to-speech/api";

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// TTS engine configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, TtsProviderConfig>,
}

/// Configuration for a single TTS engine, tagged by platform
#[derive(Debug, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum TtsProviderConfig {
    /// IBM Watson text-to-speech
    Watson(WatsonTtsConfig),
}

/// Watson engine settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatsonTtsConfig {
    /// Service URL
    #[serde(default = "default_watson_url")]
    pub watson_url: Url,
    /// IAM API key
    pub watson_apikey: SecretString,
    /// Voice used for every synthesis
    #[serde(default)]
    pub voice: Voice,
    /// Audio format requested from Watson
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Sample rate qualifier appended to the requested format
    #[serde(default)]
    pub output_audio_rate: Option<NonZeroU32>,
    /// Upper bound on a single synthesis round trip (e.g. "30s")
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl WatsonTtsConfig {
    /// Settings with every optional field at its default
    pub fn new(watson_apikey: SecretString) -> Self {
        Self {
            watson_url: default_watson_url(),
            watson_apikey,
            voice: Voice::default(),
            output_format: OutputFormat::default(),
            output_audio_rate: None,
            timeout: default_timeout(),
        }
    }
}

fn default_watson_url() -> Url {
    Url::parse(DEFAULT_WATSON_URL).expect("default Watson URL must be valid")
}

const fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    duration_str::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid duration '{raw}': {e}")))
}
