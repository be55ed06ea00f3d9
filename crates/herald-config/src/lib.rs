#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod env;
mod loader;
pub mod tts;

use serde::Deserialize;

pub use catalog::{OutputFormat, SUPPORTED_VOICES, Voice, supported_languages};
pub use tts::*;

/// Top-level Herald configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// TTS engine configuration
    #[serde(default)]
    pub tts: TtsConfig,
}
