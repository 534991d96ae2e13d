//! envhook entry point.

use clap::Parser;

use envhook::cli::{self, Cli};
use envhook::infrastructure::config::SettingsLoader;
use envhook::infrastructure::logging::LoggerImpl;

fn main() {
    let _cli = Cli::parse();

    let config = match SettingsLoader::load() {
        Ok(config) => config,
        Err(err) => cli::handle_error(&err),
    };

    if let Err(err) = LoggerImpl::init(&config.logging) {
        cli::handle_error(&err);
    }

    match cli::execute(&config) {
        Ok(rendered) => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
        Err(err) => cli::handle_error(&err),
    }
}
