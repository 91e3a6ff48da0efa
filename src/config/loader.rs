//! Configuration File Loading
//!
//! Handles loading and saving configuration files from the usual locations,
//! in TOML or JSON, falling back to built-in defaults.

use super::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension, TOML when unknown
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    /// Base paths (without extension) searched in order
    search_paths: Vec<PathBuf>,
    /// Formats tried for each base path
    supported_formats: Vec<ConfigFormat>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self::with_search_paths(Self::default_search_paths())
    }

    /// Create a loader over explicit base paths
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
        }
    }

    /// Search the configured paths, returning defaults when nothing loads
    pub fn find_or_default(&self) -> Result<Config> {
        match self.find_and_load_config() {
            Some((path, config)) => {
                debug!("Configuration loaded from {}", path.display());
                Ok(config)
            }
            None => {
                debug!("No configuration file found, using defaults");
                let config = Config::default();
                validate(&config)?;
                Ok(config)
            }
        }
    }

    /// Load and validate a specific configuration file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let format = ConfigFormat::from_path(path);
        let config = parse(&content, format)?;
        validate(&config)?;
        Ok(config)
    }

    /// Save configuration to a specific path, format chosen by extension
    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let format = ConfigFormat::from_path(path);
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                }
            })?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// Search paths this loader will try, in order
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn find_and_load_config(&self) -> Option<(PathBuf, Config)> {
        for base in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = base.with_extension(format.extension());
                if !config_path.exists() {
                    continue;
                }

                match Self::load_from_file(&config_path) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => {
                        // Keep searching
                        warn!("Skipping config {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        None
    }

    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("launchterm").join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".launchterm"));
        }

        paths
    }
}

/// Parse configuration content in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<Config> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| Error::ConfigParseFailed {
            format: format.name().to_string(),
            reason: e.to_string(),
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| Error::ConfigParseFailed {
            format: format.name().to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Validate configuration
pub fn validate(config: &Config) -> Result<()> {
    if !config.open.default_scheme.ends_with("://") || config.open.default_scheme.len() <= 3 {
        return Err(Error::ConfigValidationFailed {
            field: "open.default_scheme".to_string(),
            reason: "Scheme must look like 'https://'".to_string(),
        });
    }

    let programs = &config.programs;
    for (field, spec) in [
        ("programs.calculator", &programs.calculator),
        ("programs.text_editor", &programs.text_editor),
        ("programs.file_browser", &programs.file_browser),
        ("programs.shutdown", &programs.shutdown),
        ("programs.restart", &programs.restart),
    ] {
        if spec.program.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: field.to_string(),
                reason: "Program cannot be empty".to_string(),
            });
        }
    }

    let sites = &config.sites;
    for (field, url) in [
        ("sites.moodle", &sites.moodle),
        ("sites.erp", &sites.erp),
        ("sites.slogin", &sites.slogin),
    ] {
        if !url.contains("://") {
            return Err(Error::ConfigValidationFailed {
                field: field.to_string(),
                reason: format!("URL '{}' has no scheme", url),
            });
        }
    }

    let office = &config.office;
    for (field, path) in [("office.word", &office.word), ("office.ppt", &office.ppt)] {
        if path.as_os_str().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: field.to_string(),
                reason: "Path cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}
