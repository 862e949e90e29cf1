//! Configuration management for the markup CLI.
//!
//! Parses `markup.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `document.image_url`
//! - `document.icon_url`
//! - `output.path`

mod expand;

use markup_builder::DEFAULT_CAPACITY;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the builder's initial buffer capacity.
    pub capacity: Option<usize>,
    /// Override the output file.
    pub output: Option<PathBuf>,
    /// Override the heading color.
    pub heading_color: Option<String>,
    /// Override the attribute text injected into table cells.
    pub table_cell_attributes: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "markup.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Builder configuration.
    pub builder: BuilderConfig,
    /// Demo document content.
    pub document: DocumentConfig,
    /// Output configuration (path is a relative string from TOML).
    output: OutputConfigRaw,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Builder configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Initial buffer capacity hint in bytes.
    pub capacity: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Content of the demo document.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Text placed in the document head.
    pub title: String,
    /// CSS color of the heading.
    pub heading_color: String,
    /// Image source; normalized by the builder.
    pub image_url: String,
    /// Alt text of the image.
    pub image_alt: Option<String>,
    /// Icon source, used verbatim. No icon when unset.
    pub icon_url: Option<String>,
    /// Attribute text injected into every table cell.
    pub table_cell_attributes: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Markup demo".to_owned(),
            heading_color: "#AAD".to_owned(),
            image_url: "https://images.example.com/photo/sample.jpg".to_owned(),
            image_alt: Some("Sample image".to_owned()),
            icon_url: Some("https://images.example.com/icons/info.png".to_owned()),
            table_cell_attributes: Some(r#"style="border: 1px solid black;""#.to_owned()),
        }
    }
}

/// Raw output configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// File to write markup to. Standard output when `None`.
    pub path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`OUT_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `markup.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(capacity) = settings.capacity {
            self.builder.capacity = capacity;
        }
        if let Some(output) = &settings.output {
            self.output_resolved.path = Some(output.clone());
        }
        if let Some(color) = &settings.heading_color {
            self.document.heading_color.clone_from(color);
        }
        if let Some(attributes) = &settings.table_cell_attributes {
            self.document.table_cell_attributes = Some(attributes.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.builder.capacity == 0 {
            return Err(ConfigError::Validation(
                "builder.capacity must be greater than 0".to_owned(),
            ));
        }
        require_non_empty(&self.document.heading_color, "document.heading_color")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.document.image_url =
            expand::expand_env(&self.document.image_url, "document.image_url")?;

        if let Some(ref icon_url) = self.document.icon_url {
            self.document.icon_url = Some(expand::expand_env(icon_url, "document.icon_url")?);
        }

        if let Some(ref path) = self.output.path {
            self.output.path = Some(expand::expand_env(path, "output.path")?);
        }

        Ok(())
    }

    /// Resolve the output path relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            path: self.output.path.as_deref().map(|p| config_dir.join(p)),
        };
    }
}
