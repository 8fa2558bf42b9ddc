use std::path::PathBuf;
use serde::{Serialize, Deserialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8765/qwen3/tts";
pub const DEFAULT_OUTPUT_DIR: &str = "promo_video/audio";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tts: TtsSettings,
    #[serde(default)]
    pub icon: IconSettings,
}

/// Everything the narration batch needs to reach the service and place its output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsSettings {
    pub api_url: String,
    pub output_dir: PathBuf,
    pub language: String,
    pub speaker: String,
    pub output_format: String,
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            language: "Chinese".to_string(),
            speaker: "Vivian".to_string(),
            output_format: "wav".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// None = the source tree the binary was built from (fixed at compile
    /// time), unlike `TtsSettings::output_dir` which is relative to the cwd
    pub project_root: Option<PathBuf>,
    pub sizes: Vec<u32>,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            project_root: None,
            sizes: vec![16, 32, 48, 256],
        }
    }
}

impl IconSettings {
    pub fn resolved_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    }
}
