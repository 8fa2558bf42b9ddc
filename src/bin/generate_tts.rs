use clap::Parser;
use promo_tools_lib::commands::tts::{self, TtsArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    promo_tools_lib::init_tracing();
    tts::run(TtsArgs::parse()).await
}
