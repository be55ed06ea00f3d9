//! Mock Watson text-to-speech service

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Path prefix the mock serves under, like the public Watson URL
const API_PREFIX: &str = "/text-to-speech/api";

/// A Watson stand-in answering every synthesis with fixed content
pub struct MockWatson {
    server: MockServer,
}

impl MockWatson {
    /// Start a mock that returns `audio` for every synthesis
    pub async fn start_with_audio(audio: &[u8]) -> Self {
        Self::start(ResponseTemplate::new(200).set_body_bytes(audio.to_vec())).await
    }

    /// Start a mock that fails every synthesis with `status`
    pub async fn start_failing(status: u16, body: &str) -> Self {
        Self::start(ResponseTemplate::new(status).set_body_string(body)).await
    }

    async fn start(response: ResponseTemplate) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{API_PREFIX}/v1/synthesize")))
            .respond_with(response)
            .mount(&server)
            .await;

        Self { server }
    }

    /// Service URL to configure as `watson_url`
    pub fn base_url(&self) -> String {
        format!("{}{API_PREFIX}", self.server.uri())
    }

    /// Synthesis requests received so far
    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
