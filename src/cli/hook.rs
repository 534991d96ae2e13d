//! Implementation of the hook run.

use anyhow::{Context, Result};

use crate::adapters::build_env::{render, DefineList};
use crate::domain::ConfigError;
use crate::infrastructure::config::HookConfig;
use crate::services::EnvironmentConfigLoader;

/// Run the loader against a fresh define list and render what it added.
pub fn execute(config: &HookConfig) -> Result<String> {
    let mut build_env =
        DefineList::from_specs(&config.defines).context("Invalid pre-existing define")?;

    let loader = EnvironmentConfigLoader::new(&config.root);
    let report = loader.load_and_inject(&mut build_env)?;

    render(config.output, &report.added, &loader.env_path())
        .context("Failed to render injected defines")
}

/// Print a fatal diagnostic and terminate the build.
pub fn handle_error(err: &anyhow::Error) -> ! {
    let code = match err.downcast_ref::<ConfigError>() {
        Some(config_err) => {
            eprintln!("❌ Error: {config_err}");
            eprintln!("{}", config_err.hint());
            config_err.exit_code()
        }
        None => {
            eprintln!("❌ Error: {err:#}");
            1
        }
    };
    std::process::exit(code)
}
