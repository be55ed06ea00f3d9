use std::collections::HashMap;

use serde::Deserialize;

/// Per-request engine options, keyed by option name (e.g. `voice`)
pub type SpeechOptions = HashMap<String, String>;

/// A request from the host to speak a message
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    /// Engine to route to; the first configured engine when unset
    #[serde(default)]
    pub engine: Option<String>,
    /// Text to synthesize into speech
    pub message: String,
    /// Requested language (e.g. "en-GB")
    #[serde(default)]
    pub language: Option<String>,
    /// Engine-specific options
    #[serde(default)]
    pub options: Option<SpeechOptions>,
}

impl SpeechRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            engine: None,
            message: message.into(),
            language: None,
            options: None,
        }
    }
}

/// Synthesized audio handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAudio {
    /// File extension matching the audio encoding (e.g. "mp3")
    pub extension: String,
    /// Raw audio bytes
    pub audio: Vec<u8>,
}

impl SpeechAudio {
    /// File name the host can store this audio under
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }
}
