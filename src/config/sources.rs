//! Input file location configuration.
//!
//! The seeder reads its two JSON files from a single data directory. The
//! directory is resolved in three layers: the built-in default (`data/`),
//! an optional `seeder.toml` next to the binary, and the
//! `CATALOG_DATA_DIR` environment variable, which wins over both.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the category records inside the data directory.
pub const CATEGORIES_FILE: &str = "categories.json";
/// File name of the product records inside the data directory.
pub const PRODUCTS_FILE: &str = "products.json";

const DEFAULT_CONFIG_FILE: &str = "seeder.toml";
const DEFAULT_DATA_DIR: &str = "data";

/// Configuration structure representing the entire seeder.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Input source settings
    pub sources: SourcesConfig,
}

/// Input source settings from seeder.toml
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    /// Directory holding categories.json and products.json
    pub data_dir: PathBuf,
}

/// Resolved locations of the two input files.
#[derive(Debug, Clone)]
pub struct SourceFiles {
    /// Path to the categories file
    pub categories: PathBuf,
    /// Path to the products file
    pub products: PathBuf,
}

impl SourceFiles {
    /// Builds the file paths for a given data directory.
    #[must_use]
    pub fn from_data_dir(dir: &Path) -> Self {
        Self {
            categories: dir.join(CATEGORIES_FILE),
            products: dir.join(PRODUCTS_FILE),
        }
    }
}

/// Loads seeder configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seeder.toml: {e}"),
    })
}

/// Resolves the input file locations from the environment and the optional
/// `seeder.toml` in the working directory.
///
/// An absent config file falls back to the default data directory; a config
/// file that exists but cannot be parsed is an error.
pub fn resolve_source_files() -> Result<SourceFiles> {
    resolve_from(
        Path::new(DEFAULT_CONFIG_FILE),
        std::env::var("CATALOG_DATA_DIR").ok().as_deref(),
    )
}

fn resolve_from(config_path: &Path, env_data_dir: Option<&str>) -> Result<SourceFiles> {
    if let Some(dir) = env_data_dir {
        return Ok(SourceFiles::from_data_dir(Path::new(dir)));
    }

    let data_dir = if config_path.exists() {
        load_config(config_path)?.sources.data_dir
    } else {
        PathBuf::from(DEFAULT_DATA_DIR)
    };

    Ok(SourceFiles::from_data_dir(&data_dir))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_sources_config() {
        let toml_str = r#"
            [sources]
            data_dir = "fixtures/catalog"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sources.data_dir, PathBuf::from("fixtures/catalog"));
    }

    #[test]
    fn test_source_files_from_data_dir() {
        let files = SourceFiles::from_data_dir(Path::new("data"));
        assert_eq!(files.categories, PathBuf::from("data/categories.json"));
        assert_eq!(files.products, PathBuf::from("data/products.json"));
    }

    #[test]
    fn test_env_override_wins_over_config_file() {
        // The config path does not even need to exist when the env var is set
        let files = resolve_from(Path::new("does-not-exist.toml"), Some("/tmp/catalog")).unwrap();
        assert_eq!(files.categories, PathBuf::from("/tmp/catalog/categories.json"));
    }

    #[test]
    fn test_missing_config_file_falls_back_to_default() {
        let files = resolve_from(Path::new("does-not-exist.toml"), None).unwrap();
        assert_eq!(files.categories, PathBuf::from("data/categories.json"));
        assert_eq!(files.products, PathBuf::from("data/products.json"));
    }

    #[test]
    fn test_config_file_sets_data_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("seeder.toml");
        std::fs::write(&config_path, "[sources]\ndata_dir = \"inputs\"\n")?;

        let files = resolve_from(&config_path, None)?;
        assert_eq!(files.categories, PathBuf::from("inputs/categories.json"));
        Ok(())
    }

    #[test]
    fn test_malformed_config_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("seeder.toml");
        std::fs::write(&config_path, "[sources\ndata_dir = 3\n")?;

        let result = resolve_from(&config_path, None);
        assert!(matches!(result, Err(Error::Config { message: _ })));
        Ok(())
    }
}
