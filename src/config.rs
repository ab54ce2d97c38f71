use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for version-gate.
///
/// Contains file locations, assignment keys, the tag naming pattern, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default manifest path.
fn default_manifest_file() -> String {
    "pyproject.toml".to_string()
}

/// Returns the default module metadata path.
fn default_module_file() -> String {
    "__init__.py".to_string()
}

/// Configuration for the files the gate reads.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest_file")]
    pub manifest: String,

    #[serde(default = "default_module_file")]
    pub module: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest_file(),
            module: default_module_file(),
        }
    }
}

/// Returns the default manifest assignment key.
fn default_manifest_key() -> String {
    "version".to_string()
}

/// Returns the default module assignment key.
fn default_module_key() -> String {
    "__version__".to_string()
}

/// Configuration for the assignment keys the extractor looks for.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeysConfig {
    #[serde(default = "default_manifest_key")]
    pub manifest: String,

    #[serde(default = "default_module_key")]
    pub module: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            manifest: default_manifest_key(),
            module: default_module_key(),
        }
    }
}

/// Returns the default tag naming pattern.
fn default_tag_pattern() -> String {
    "{version}".to_string()
}

/// Configuration for mapping tag names to version tokens.
///
/// The pattern must contain a `{version}` placeholder (e.g., "v{version}").
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            pattern: default_tag_pattern(),
        }
    }
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of version-gate without affecting how versions are resolved.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub deny_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: FilesConfig::default(),
            keys: KeysConfig::default(),
            tag: TagConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiongate.toml` in current directory
/// 3. `~/.config/.versiongate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versiongate.toml").exists() {
        fs::read_to_string("./versiongate.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versiongate.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
