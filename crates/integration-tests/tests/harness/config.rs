//! Config files for integration tests

use std::io::Write;

use tempfile::NamedTempFile;

/// Builder for a TOML configuration file with Watson engines
pub struct ConfigBuilder {
    toml: String,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self { toml: String::new() }
    }

    /// Add a Watson engine; `settings` are extra `key = value` lines
    pub fn with_watson(mut self, name: &str, watson_url: &str, settings: &[&str]) -> Self {
        self.toml.push_str(&format!(
            "[tts.providers.{name}]\nplatform = \"watson\"\nwatson_url = \"{watson_url}\"\nwatson_apikey = \"test-key\"\n"
        ));
        for setting in settings {
            self.toml.push_str(setting);
            self.toml.push('\n');
        }
        self.toml.push('\n');
        self
    }

    /// Write the configuration to a temporary file
    pub fn write(self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(self.toml.as_bytes()).expect("write temp config");
        file
    }
}
