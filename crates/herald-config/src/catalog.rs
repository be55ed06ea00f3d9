//! Static Watson voice and output format catalogs

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Deserializer, de};

/// Length of the `xx-YY` language/region prefix carried by every voice identifier
const LANGUAGE_PREFIX_LEN: usize = 5;

/// Voices accepted by the Watson synthesis endpoint
pub const SUPPORTED_VOICES: &[&str] = &[
    "de-DE_BirgitVoice",
    "de-DE_BirgitV2Voice",
    "de-DE_DieterVoice",
    "de-DE_DieterV2Voice",
    "en-GB_KateVoice",
    "en-US_AllisonVoice",
    "en-US_AllisonV2Voice",
    "en-US_LisaVoice",
    "en-US_LisaV2Voice",
    "en-US_MichaelVoice",
    "en-US_MichaelV2Voice",
    "es-ES_EnriqueVoice",
    "es-ES_LauraVoice",
    "es-LA_SofiaVoice",
    "es-US_SofiaVoice",
    "fr-FR_ReneeVoice",
    "it-IT_FrancescaVoice",
    "it-IT_FrancescaV2Voice",
    "ja-JP_EmiVoice",
    "pt-BR_IsabelaVoice",
];

const DEFAULT_VOICE: &str = "en-US_AllisonVoice";

/// Distinct language prefixes across the voice catalog, sorted
pub fn supported_languages() -> Vec<&'static str> {
    SUPPORTED_VOICES
        .iter()
        .copied()
        .map(language_prefix)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn language_prefix(voice: &'static str) -> &'static str {
    voice.get(..LANGUAGE_PREFIX_LEN).unwrap_or(voice)
}

/// A voice identifier known to be in [`SUPPORTED_VOICES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice(&'static str);

impl Voice {
    /// Look up a voice in the catalog
    pub fn from_catalog(name: &str) -> Option<Self> {
        SUPPORTED_VOICES
            .iter()
            .copied()
            .find(|candidate| *candidate == name)
            .map(Self)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Language/region prefix of this voice (e.g. `en-GB`)
    pub fn language(&self) -> &'static str {
        language_prefix(self.0)
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self(DEFAULT_VOICE)
    }
}

impl TryFrom<String> for Voice {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_catalog(&value).ok_or_else(|| format!("unsupported Watson voice `{value}`"))
    }
}

impl<'de> Deserialize<'de> for Voice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::try_from(String::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Audio formats the Watson endpoint can produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "audio/flac")]
    Flac,
    #[default]
    #[serde(rename = "audio/mp3")]
    Mp3,
    #[serde(rename = "audio/mpeg")]
    Mpeg,
    #[serde(rename = "audio/ogg")]
    Ogg,
    #[serde(rename = "audio/ogg;codecs=opus")]
    OggOpus,
    #[serde(rename = "audio/ogg;codecs=vorbis")]
    OggVorbis,
    #[serde(rename = "audio/wav")]
    Wav,
}

impl OutputFormat {
    pub const ALL: [Self; 7] = [
        Self::Flac,
        Self::Mp3,
        Self::Mpeg,
        Self::Ogg,
        Self::OggOpus,
        Self::OggVorbis,
        Self::Wav,
    ];

    /// MIME type sent as the `Accept` value
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Flac => "audio/flac",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::OggOpus => "audio/ogg;codecs=opus",
            Self::OggVorbis => "audio/ogg;codecs=vorbis",
            Self::Wav => "audio/wav",
        }
    }

    /// File extension used when the host stores or plays the audio
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Mp3 | Self::Mpeg => "mp3",
            Self::Ogg | Self::OggOpus | Self::OggVorbis => "ogg",
            Self::Wav => "wav",
        }
    }

    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.mime_type() == mime_type)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}
