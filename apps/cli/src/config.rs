//! Settings loading and logging set-up.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use netpanel_validator::settings::{RuleSettings, Rules};
use tracing_subscriber::EnvFilter;

/// Settings file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "netpanel.toml";

/// Prefix of environment overrides, e.g. `NETPANEL_PORT_MIN=1024` or
/// `NETPANEL_VLAN_ID__MAX=999`.
pub const ENV_PREFIX: &str = "NETPANEL_";

/// Layers defaults, the settings file and the environment, then checks the
/// result.
pub fn load_rules(config: Option<&Path>) -> anyhow::Result<Rules> {
    let mut figment = Figment::from(Serialized::defaults(RuleSettings::default()));

    match config {
        Some(path) => {
            anyhow::ensure!(path.is_file(), "config file {} not found", path.display());
            figment = figment.merge(Toml::file(path));
        }
        None => figment = figment.merge(Toml::file(PathBuf::from(DEFAULT_CONFIG_FILE))),
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").ignore(&["config"]));

    let settings: RuleSettings = figment.extract().context("failed to load settings")?;
    tracing::debug!(?settings, "settings loaded");
    Rules::new(settings).context("invalid settings")
}

/// Installs the stderr subscriber. `-v` overrides `RUST_LOG`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
