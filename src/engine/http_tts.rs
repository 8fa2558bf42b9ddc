use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{SpeechService, SynthesisRequest, SynthesisResult};

const USER_AGENT: &str = concat!("PromoTools/", env!("CARGO_PKG_VERSION"));

/// Speech service reached over HTTP with a JSON POST per request
pub struct HttpSpeechService {
    client: reqwest::Client,
    url: String,
}

impl HttpSpeechService {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SpeechService for HttpSpeechService {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        let resp = self.client.post(&self.url)
            .header("User-Agent", USER_AGENT)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to reach speech service at {}", self.url))?
            .error_for_status()?;

        let result: SynthesisResult = resp.json().await
            .context("Speech service returned a malformed response")?;
        tracing::debug!(
            "Service replied success={} payload_len={}",
            result.success,
            result.audio_base64.as_ref().map_or(0, |a| a.len())
        );
        Ok(result)
    }
}
