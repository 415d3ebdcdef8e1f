use super::{
    analysis::AnalysisConfig,
    api::ApiConfig,
    chart::ChartConfig,
    traits::ConfigSection,
};
use crate::error::YieldCurveError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "yieldcurve.toml";
/// Overrides the location of [`CONFIG_FILE`]
pub const CONFIG_PATH_ENV: &str = "YIELDCURVE_CONFIG";
/// Environment overrides look like `YIELDCURVE_API__API_KEY`
pub const ENV_PREFIX: &str = "YIELDCURVE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub analysis: AnalysisConfig,
    pub chart: ChartConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), YieldCurveError> {
        self.api.validate()?;
        self.analysis.validate()?;
        self.chart.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
    /// What the config file alone holds, without environment overrides.
    /// This is what gets written back.
    file_config: AppConfig,
    path: PathBuf,
    /// Set when the file at `path` failed to load; saving would clobber it.
    file_rejected: bool,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            file_config: AppConfig::default(),
            path: Self::default_path(),
            file_rejected: false,
        }
    }

    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Startup loading: defaults, then the config file if present, then the
    /// process environment. Falls back to defaults when the result is invalid.
    pub fn load_or_default() -> Self {
        let mut manager = Self::new();
        let path = manager.path.clone();
        if let Err(e) = manager.load_from_file(&path) {
            log::warn!("Using default configuration: {}", e);
        }
        manager
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), YieldCurveError> {
        self.load_layers(path.as_ref(), Environment::with_prefix(ENV_PREFIX))
    }

    /// Same layering as [`Self::load_from_file`] with an explicit set of
    /// variables in place of the process environment.
    pub fn load_with_env<P, I>(&mut self, path: P, vars: I) -> Result<(), YieldCurveError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: config::Map<String, String> = vars.into_iter().collect();
        self.load_layers(path.as_ref(), Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load_layers(&mut self, path: &Path, env: Environment) -> Result<(), YieldCurveError> {
        self.path = path.to_path_buf();

        let loaded = Self::read_file(path).and_then(|file_config| {
            let config = Self::read_layered(path, env)?;
            config.validate()?;
            Ok((file_config, config))
        });

        match loaded {
            Ok((file_config, config)) => {
                self.file_config = file_config;
                self.config = config;
                self.file_rejected = false;
                Ok(())
            }
            Err(e) => {
                self.file_rejected = true;
                Err(e)
            }
        }
    }

    fn read_file(path: &Path) -> Result<AppConfig, YieldCurveError> {
        let file = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()?;
        Ok(file.try_deserialize()?)
    }

    fn read_layered(path: &Path, env: Environment) -> Result<AppConfig, YieldCurveError> {
        let layered = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?;

        Ok(layered.try_deserialize()?)
    }

    /// Writes the file layer to `path`. Environment overrides stay out of the
    /// file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), YieldCurveError> {
        let toml_str = toml::to_string_pretty(&self.file_config)?;

        std::fs::write(path, toml_str)
            .map_err(|e| YieldCurveError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn save(&self) -> Result<(), YieldCurveError> {
        if self.file_rejected {
            return Err(YieldCurveError::Configuration(format!(
                "Not overwriting {}, it failed to load",
                self.path.display()
            )));
        }
        self.save_to_file(&self.path)
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
