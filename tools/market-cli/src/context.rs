//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use market_catalog::catalog::Catalog;
use market_observability::{LogLevel, RequestId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: CliConfig,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    /// Logger for this invocation.
    pub logger: StructuredLogger,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or by searching upwards.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        let min_level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logger = StructuredLogger::new(RequestId::generate())
            .with_component("market-cli")
            .with_min_level(min_level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Load the catalog named on the command line, or the configured one.
    ///
    /// A configured path is relative to the config file's directory.
    pub fn load_catalog(&self, override_path: Option<&str>) -> Result<Catalog> {
        let path = match (override_path, &self.config.catalog.path) {
            (Some(path), _) => self.resolve_path(path),
            (None, Some(path)) => {
                let base = self
                    .config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(self.cwd.as_path());
                resolve(base, path)
            }
            (None, None) => anyhow::bail!(
                "No catalog configured. Pass --catalog or set catalog.path in market.toml"
            ),
        };

        let spinner = self.output.spinner(&format!("Loading {}", path.display()));
        let catalog = read_catalog(&path);
        spinner.finish_and_clear();
        let catalog = catalog?;

        self.logger
            .info_builder("catalog loaded")
            .field("path", path.display().to_string())
            .field_u64("vendors", catalog.vendors().len() as u64)
            .field_u64("products", catalog.product_count() as u64)
            .emit();

        Ok(catalog)
    }
}

/// Read a catalog file. `.toml` files are TOML, everything else JSON.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let catalog = if path.extension().map_or(false, |e| e == "toml") {
        Catalog::from_toml(&content)
    } else {
        Catalog::from_json(&content)
    };
    catalog.with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Find a config file in `start` or any parent directory.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".market.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".market.toml"));
    }

    #[test]
    fn test_read_catalog_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("catalog.json");
        std::fs::write(
            &json,
            r#"{"vendors":[{"id":"v","name":"V","category":"Food","products":[]}]}"#,
        )
        .unwrap();
        assert_eq!(read_catalog(&json).unwrap().vendors().len(), 1);

        let toml = dir.path().join("catalog.toml");
        std::fs::write(
            &toml,
            "[[vendors]]\nid = \"v\"\nname = \"V\"\ncategory = \"Bakery\"\n",
        )
        .unwrap();
        assert_eq!(read_catalog(&toml).unwrap().vendors().len(), 1);
    }

    #[test]
    fn test_configured_catalog_is_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let conf_dir = dir.path().join("conf");
        let elsewhere = dir.path().join("elsewhere");
        std::fs::create_dir_all(&conf_dir).unwrap();
        std::fs::create_dir_all(&elsewhere).unwrap();
        std::fs::write(
            conf_dir.join("catalog.json"),
            r#"{"vendors":[{"id":"v","name":"V","category":"Food","products":[]}]}"#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.catalog.path = Some("catalog.json".to_string());
        let ctx = Context {
            config,
            config_path: Some(conf_dir.join("market.toml")),
            output: Output::new(false, true),
            logger: StructuredLogger::new(RequestId::generate()).with_min_level(LogLevel::Error),
            cwd: elsewhere,
        };

        assert_eq!(ctx.load_catalog(None).unwrap().vendors().len(), 1);
        assert!(ctx.load_catalog(Some("catalog.json")).is_err());
    }

    #[test]
    fn test_read_catalog_reports_path() {
        let err = read_catalog(Path::new("/definitely/missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }
}
