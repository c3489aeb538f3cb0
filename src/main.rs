//! waml: Web Audio Markup Language compiler.

use std::process;

use clap::Parser;
use tracing::{debug, error, warn};

use waml::cli::{self, Args};
use waml::config::LoggingConfig;
use waml::logging;

fn main() {
    let args = Args::parse();

    let (config, warning) = match cli::load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(&LoggingConfig::default());
            error!("{e}");
            process::exit(1);
        }
    };
    logging::init(&config.logging);
    if let Some(warning) = warning {
        warn!("{warning}, using defaults");
    }
    debug!("waml v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::run(&args, &config) {
        error!("{e}");
        process::exit(1);
    }
}
