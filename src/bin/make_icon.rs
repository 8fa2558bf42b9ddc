use std::process::ExitCode;
use clap::Parser;
use promo_tools_lib::commands::icon::{self, IconArgs};

fn main() -> ExitCode {
    promo_tools_lib::init_tracing();
    icon::run(IconArgs::parse())
}
