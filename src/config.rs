use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::csv_store::CsvStore;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_data_file() -> PathBuf {
    CsvStore::default_path()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            data_file: default_data_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dictit")
            .join("config.toml")
    }

    pub fn data_path(&self) -> &Path {
        &self.data_file
    }

    /// Command-line values win over the config file.
    pub fn apply_overrides(&mut self, theme: Option<String>, data_file: Option<PathBuf>) {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(path) = data_file {
            self.data_file = path;
        }
    }

    /// Reset values that cannot be used, e.g. a theme removed since the config
    /// was written or a blank data file path.
    pub fn validate(&mut self, available_themes: &[String]) {
        if !available_themes.iter().any(|t| *t == self.theme) {
            log::warn!("unknown theme {:?}, using {}", self.theme, default_theme());
            self.theme = default_theme();
        }
        let blank = self
            .data_file
            .to_str()
            .is_some_and(|s| s.trim().is_empty());
        if blank {
            self.data_file = default_data_file();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> Vec<String> {
        vec!["catppuccin-mocha".to_string(), "gruvbox-dark".to_string()]
    }

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert!(config.data_file.ends_with("vocab_data.csv"));
    }

    #[test]
    fn test_config_serde_partial_file() {
        let config: Config = toml::from_str(r#"data_file = "/tmp/words.csv""#).unwrap();
        assert_eq!(config.data_path(), Path::new("/tmp/words.csv"));
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            theme: "gruvbox-dark".to_string(),
            data_file: PathBuf::from("words.csv"),
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.theme, "gruvbox-dark");
        assert_eq!(deserialized.data_file, PathBuf::from("words.csv"));
    }

    #[test]
    fn test_validate_unknown_theme_resets() {
        let mut config = Config {
            theme: "neon-nights".to_string(),
            ..Config::default()
        };
        config.validate(&themes());
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_validate_known_theme_unchanged() {
        let mut config = Config {
            theme: "gruvbox-dark".to_string(),
            ..Config::default()
        };
        config.validate(&themes());
        assert_eq!(config.theme, "gruvbox-dark");
    }

    #[test]
    fn test_validate_blank_data_file_resets() {
        let mut config = Config {
            data_file: PathBuf::from("  "),
            ..Config::default()
        };
        config.validate(&themes());
        assert!(config.data_file.ends_with("vocab_data.csv"));
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        config.apply_overrides(Some("gruvbox-dark".to_string()), Some("words.csv".into()));
        assert_eq!(config.theme, "gruvbox-dark");
        assert_eq!(config.data_path(), Path::new("words.csv"));

        config.apply_overrides(None, None);
        assert_eq!(config.theme, "gruvbox-dark");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_data_file_is_kept_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/vocab-\xff.csv");
        let mut config = Config::default();
        config.apply_overrides(None, Some(PathBuf::from(raw)));
        config.validate(&themes());
        assert_eq!(config.data_path().as_os_str().as_bytes(), raw.as_bytes());
    }
}
