use std::{num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use herald_config::{OutputFormat, Voice, WatsonTtsConfig, supported_languages};

use super::{TtsProvider, VOICE_OPTION};
use crate::{
    client::{SpeechClient, WatsonClient},
    types::{SpeechAudio, SpeechOptions},
};

/// IBM Watson TTS engine
///
/// Every synthesis uses the configured voice and format.
pub struct WatsonTtsProvider {
    name: String,
    client: Arc<dyn SpeechClient>,
    supported_languages: Vec<String>,
    default_language: String,
    default_voice: Voice,
    output_format: OutputFormat,
    output_audio_rate: Option<NonZeroU32>,
}

impl WatsonTtsProvider {
    pub fn new(name: String, client: Arc<dyn SpeechClient>, config: &WatsonTtsConfig) -> Self {
        Self {
            name,
            client,
            supported_languages: supported_languages().into_iter().map(str::to_owned).collect(),
            default_language: config.voice.language().to_owned(),
            default_voice: config.voice,
            output_format: config.output_format,
            output_audio_rate: config.output_audio_rate,
        }
    }

    /// Build the engine together with its Watson client
    pub fn from_config(name: String, config: &WatsonTtsConfig) -> crate::error::Result<Self> {
        let client = WatsonClient::new(&config.watson_url, config.watson_apikey.clone(), config.timeout)?;

        Ok(Self::new(name, Arc::new(client), config))
    }

    /// Format string sent as `Accept`, carrying the sample rate when one is set
    fn accept(&self) -> String {
        match self.output_audio_rate {
            Some(rate) => format!("{};rate={rate}", self.output_format.mime_type()),
            None => self.output_format.mime_type().to_owned(),
        }
    }
}

#[async_trait]
impl TtsProvider for WatsonTtsProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    fn default_language(&self) -> &str {
        &self.default_language
    }

    fn default_options(&self) -> SpeechOptions {
        SpeechOptions::from([(VOICE_OPTION.to_owned(), self.default_voice.as_str().to_owned())])
    }

    fn supported_options(&self) -> &[&'static str] {
        &[VOICE_OPTION]
    }

    async fn synthesize(
        &self,
        message: &str,
        language: Option<&str>,
        options: Option<&SpeechOptions>,
    ) -> crate::error::Result<SpeechAudio> {
        // Per-request language and voice are not honored; the configured voice always speaks
        let requested_voice = options.and_then(|options| options.get(VOICE_OPTION));
        if language.is_some_and(|language| language != self.default_language)
            || requested_voice.is_some_and(|voice| voice != self.default_voice.as_str())
        {
            tracing::debug!(
                engine = %self.name,
                ?language,
                ?requested_voice,
                "ignoring per-request override, using {}",
                self.default_voice
            );
        }

        let accept = self.accept();
        let audio = self
            .client
            .synthesize(message, &accept, self.default_voice.as_str())
            .await?;

        Ok(SpeechAudio {
            extension: self.output_format.extension().to_owned(),
            audio,
        })
    }
}
