//! Configuration management module.
//!
//! This module handles loading and saving the application configuration,
//! including the weather API key, the default city, service endpoints, the
//! theme and the log level.

mod error;

pub use error::ConfigError;

use crate::api::{DEFAULT_ADVICE_BASE_URL, DEFAULT_WEATHER_BASE_URL};
use crate::error::AppResult;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const STORAGE_FILE_NAME: &str = "storage.json";
const DEFAULT_DIRECTORY_PATH: &str = ".config/startpage";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub weather_api_key: String,
    pub default_city: String,
    pub theme_name: String,
    pub log_level: String,
    pub weather_base_url: String,
    pub advice_base_url: String,
    dir_path: Option<PathBuf>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub weather_api_key: String,
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    #[serde(default = "default_advice_base_url")]
    pub advice_base_url: String,
}

fn default_city() -> String {
    "London".to_string()
}

fn default_theme_name() -> String {
    "rose-pine-dawn".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_weather_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_advice_base_url() -> String {
    DEFAULT_ADVICE_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values and no file path.
    ///
    pub fn new() -> Config {
        Config {
            weather_api_key: String::new(),
            default_city: default_city(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            weather_base_url: default_weather_base_url(),
            advice_base_url: default_advice_base_url(),
            dir_path: None,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// defaults so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.dir_path = Some(dir_path);
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.weather_api_key = data.weather_api_key;
            self.default_city = data.default_city;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
            self.weather_base_url = data.weather_base_url;
            self.advice_base_url = data.advice_base_url;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            weather_api_key: self.weather_api_key.clone(),
            default_city: self.default_city.clone(),
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            weather_base_url: self.weather_base_url.clone(),
            advice_base_url: self.advice_base_url.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the parsed log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Return the path of the key-value storage file, which lives next to the
    /// configuration file.
    ///
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        self.dir_path
            .as_ref()
            .map(|dir| dir.join(STORAGE_FILE_NAME))
            .ok_or(ConfigError::FilePathNotSet)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
