//! CLI type definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "envhook")]
#[command(
    about = "Validate WiFi credentials in .env and emit them as preprocessor defines",
    long_about = "Reads .env from the build root, checks that WIFI_SSID and WIFI_PASSWORD \
                  are set and prints them as quoted string defines on stdout. Status lines \
                  go to stderr. Settings come from envhook.yaml and ENVHOOK_* variables."
)]
#[command(version)]
pub struct Cli {}
