pub mod watson;

use async_trait::async_trait;

use crate::types::{SpeechAudio, SpeechOptions};

/// Option key selecting the voice of a synthesis
pub const VOICE_OPTION: &str = "voice";

/// Contract every TTS engine exposes to the host
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Get the engine name
    fn name(&self) -> &str;

    /// Languages the engine can speak
    fn supported_languages(&self) -> &[String];

    /// Language used when the request names none
    fn default_language(&self) -> &str;

    /// Options applied when the request sets none
    fn default_options(&self) -> SpeechOptions;

    /// Option keys the engine recognizes
    fn supported_options(&self) -> &[&'static str];

    /// Synthesize `message`, returning the audio and its file extension
    async fn synthesize(
        &self,
        message: &str,
        language: Option<&str>,
        options: Option<&SpeechOptions>,
    ) -> crate::error::Result<SpeechAudio>;
}
