use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use crate::engine::HttpSpeechService;
use crate::narration::{self, BatchReport, PROMO_SEGMENTS};
use crate::persistence;
use crate::settings::TtsSettings;

#[derive(Parser, Debug, Default)]
#[command(name = "generate-tts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate the promo narration through the speech service")]
pub struct TtsArgs {
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Speech service endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory receiving the <segment>.wav files [default: promo_video/audio under the current directory]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl TtsArgs {
    pub fn resolve(self) -> TtsSettings {
        let mut settings = persistence::load_settings(self.config.as_deref()).tts;
        if let Some(url) = self.api_url {
            settings.api_url = url;
        }
        if let Some(dir) = self.output_dir {
            settings.output_dir = dir;
        }
        settings
    }
}

pub async fn generate(settings: &TtsSettings) -> Result<BatchReport> {
    let service = HttpSpeechService::new(settings.api_url.clone());
    tracing::info!("Using speech service at {}", service.url());

    let mut stdout = std::io::stdout();
    narration::generate_all(&service, settings, &PROMO_SEGMENTS, &mut stdout).await
}

pub async fn run(args: TtsArgs) -> Result<()> {
    let settings = args.resolve();
    generate(&settings).await?;
    Ok(())
}
