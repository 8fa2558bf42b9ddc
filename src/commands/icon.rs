use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;

use crate::icon::{self, IconError, IconReport, IconSpec};
use crate::persistence;
use crate::settings::IconSettings;

#[derive(Parser, Debug, Default)]
#[command(name = "make-icon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build img/icon.ico (16, 32, 48, 256) from img/icon.png")]
pub struct IconArgs {
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding img/icon.png [default: the source tree this binary was built from]
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

impl IconArgs {
    pub fn resolve(self) -> IconSettings {
        let mut settings = persistence::load_settings(self.config.as_deref()).icon;
        if self.project_root.is_some() {
            settings.project_root = self.project_root;
        }
        settings
    }
}

pub fn convert(settings: &IconSettings) -> Result<IconReport, IconError> {
    let spec = IconSpec::for_project(&settings.resolved_root(), &settings.sizes);
    icon::convert(&spec)
}

pub fn run(args: IconArgs) -> ExitCode {
    let settings = args.resolve();
    match convert(&settings) {
        Ok(report) => {
            println!("Created: {}", report.destination.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Icon conversion failed: {:?}", e);
            println!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
