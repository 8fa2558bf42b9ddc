pub mod http_tts;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Serialize, Deserialize, Deserializer};
use serde_json::Value;

use crate::settings::TtsSettings;

pub use http_tts::HttpSpeechService;

/// Request body sent to the speech service for one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: String,
    pub speaker: String,
    pub output_format: String,
}

impl SynthesisRequest {
    pub fn new(text: &str, settings: &TtsSettings) -> Self {
        Self {
            text: text.to_string(),
            language: settings.language.clone(),
            speaker: settings.speaker.clone(),
            output_format: settings.output_format.clone(),
        }
    }
}

/// Response body returned by the speech service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
    /// Seconds of audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Truthiness: null, 0, "" and empty containers read as false
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

impl SynthesisResult {
    pub fn ok(audio_base64: impl Into<String>, duration: f64) -> Self {
        Self {
            success: true,
            audio_base64: Some(audio_base64.into()),
            duration: Some(duration),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Text -> audio. An `Err` means the call itself broke (transport, status,
/// decoding); a refusal by the service comes back as `success: false`.
#[async_trait]
pub trait SpeechService: Send + Sync {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult>;
}
