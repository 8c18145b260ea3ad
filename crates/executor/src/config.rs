use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;
use bellman_core::{BellmanFordSolver, CycleMarking};

/// Environment variable that points at an alternative configuration file.
pub const CONFIG_PATH_VAR: &str = "BELLMAN_CONFIG";

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CycleMarkingSetting {
    #[default]
    SinglePass,
    Closure,
}

impl From<CycleMarkingSetting> for CycleMarking {
    fn from(setting: CycleMarkingSetting) -> Self {
        match setting {
            CycleMarkingSetting::SinglePass => CycleMarking::SinglePass,
            CycleMarkingSetting::Closure => CycleMarking::Closure,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    /// Label of the source vertex, e.g. "A".
    pub source: String,
    #[serde(default)]
    pub all_sources: bool,
    #[serde(default)]
    pub cycle_marking: CycleMarkingSetting,
    #[serde(default = "default_early_exit")]
    pub early_exit: bool,
}

impl RunConfig {
    pub fn solver(&self) -> BellmanFordSolver {
        BellmanFordSolver::new()
            .with_cycle_marking(self.cycle_marking.into())
            .with_early_exit(self.early_exit)
    }
}

fn default_early_exit() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub enabled: bool,
    pub output_dir: PathBuf,
    pub table_prefix: String,
    pub graph_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub run: RunConfig,
    pub export: ExportConfig,
}

/// Loads configuration from `$BELLMAN_CONFIG`, or `crates/executor/Config.toml`
/// under the current directory, layered with `EXECUTOR_*` environment variables.
pub fn load_config() -> Result<Config, Error> {
    let config_file_path = match env::var_os(CONFIG_PATH_VAR) {
        Some(path) => PathBuf::from(path),
        None => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            base_path
                .join("crates")
                .join("executor")
                .join("Config.toml")
        }
    };

    load_config_from(&config_file_path)
}

/// Loads configuration from an explicit file path.
///
/// Nested keys are overridden with a double underscore, e.g.
/// `EXECUTOR_RUN__CYCLE_MARKING=closure`.
pub fn load_config_from(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
