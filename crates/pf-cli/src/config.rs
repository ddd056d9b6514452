//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base name for the report artifact.
    pub report_name: String,
    /// Directory the report artifact is written to.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_name: "patient-report".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Precedence: defaults, then `<config dir>/pf/config.toml`, then the
    /// explicit file, then `PF_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("PF_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for pf.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pf"))
}
