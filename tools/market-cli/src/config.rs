//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use market_catalog::search::Pagination;
use market_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["market.toml", ".market.toml", "market.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, everything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check values that serde cannot. Returns (errors, warnings).
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.search.per_page == 0 {
            errors.push("search.per_page must be at least 1".to_string());
        } else if self.search.per_page > Pagination::MAX_PER_PAGE {
            warnings.push(format!(
                "search.per_page {} will be clamped to {}",
                self.search.per_page,
                Pagination::MAX_PER_PAGE
            ));
        }

        if self.search.related_limit == 0 {
            errors.push("search.related_limit must be at least 1".to_string());
        }

        match &self.catalog.path {
            None => warnings.push(
                "catalog.path is not set; commands will need --catalog".to_string(),
            ),
            Some(path) if path.trim().is_empty() => {
                errors.push("catalog.path must not be empty".to_string())
            }
            Some(_) => {}
        }

        (errors, warnings)
    }

    /// Read a value by dot-separated key.
    pub fn get(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["catalog", "path"] => Ok(self
                .catalog
                .path
                .as_ref()
                .map(|p| format!("\"{}\"", p))
                .unwrap_or_else(|| "null".to_string())),
            ["search", "per_page"] => Ok(self.search.per_page.to_string()),
            ["search", "related_limit"] => Ok(self.search.related_limit.to_string()),
            ["logging", "level"] => {
                let level = self.logging.level.to_string().to_lowercase();
                Ok(format!("\"{}\"", level))
            }
            ["logging", "format"] => Ok(format!("\"{}\"", format_name(self.logging.format))),
            _ => bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by dot-separated key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["catalog", "path"] => self.catalog.path = Some(value.to_string()),
            ["search", "per_page"] => {
                self.search.per_page = value
                    .parse()
                    .with_context(|| format!("Invalid number for {}: {}", key, value))?
            }
            ["search", "related_limit"] => {
                self.search.related_limit = value
                    .parse()
                    .with_context(|| format!("Invalid number for {}: {}", key, value))?
            }
            ["logging", "level"] => self.logging.level = value.parse()?,
            ["logging", "format"] => self.logging.format = value.parse()?,
            _ => bail!("Unknown config key: {}", key),
        }

        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

fn format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Json => "json",
        LogFormat::Human => "human",
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to a JSON or TOML catalog file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Search defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Related products shown per product.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_per_page() -> usize {
    24
}

fn default_related_limit() -> usize {
    market_catalog::search::RELATED_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            related_limit: default_related_limit(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default market.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Marketplace catalog configuration

[catalog]
path = "{catalog_path}"

[search]
per_page = 24
related_limit = 4

[logging]
# trace | debug | info | warn | error
level = "info"
# human | json
format = "human"
"#,
        catalog_path = catalog_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: CliConfig = toml::from_str("[catalog]\npath = \"c.json\"\n").unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("c.json"));
        assert_eq!(config.search.per_page, 24);
        assert_eq!(config.search.related_limit, 4);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_parses() {
        let text = generate_default_config("data/catalog.json");
        let config: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("data/catalog.json"));
        let (errors, warnings) = config.check();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_check_flags_bad_values() {
        let mut config = CliConfig::default();
        config.search.per_page = 0;
        config.search.related_limit = 0;
        let (errors, warnings) = config.check();
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = CliConfig::default();
        config.set("search.per_page", "12").unwrap();
        config.set("logging.format", "json").unwrap();
        config.set("catalog.path", "x.toml").unwrap();

        assert_eq!(config.get("search.per_page").unwrap(), "12");
        assert_eq!(config.get("logging.format").unwrap(), "\"json\"");
        assert_eq!(config.get("catalog.path").unwrap(), "\"x.toml\"");
        assert!(config.set("search.per_page", "many").is_err());
        assert!(config.get("nope.key").is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.path = Some("catalog.json".to_string());
        config.logging.level = LogLevel::Debug;

        for name in ["market.toml", "market.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(CliConfig::load(&path).unwrap(), config);
        }
    }
}
