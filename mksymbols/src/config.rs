use anyhow::*;
use mksymbols_common::paths::{parent_dir, resolve_from};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// The configuration file looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mksymbols.toml";

pub const DEFAULT_DOWNLOAD_URL_PREFIX: &str =
    "https://github.com/google/material-design-icons/raw/master/variablefont/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    assets_dir: PathBuf,
    subset_tool: String,
    download_tool: String,
    download_url_prefix: String,
    descriptor_file: PathBuf,
}
impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            assets_dir: PathBuf::from("data"),
            subset_tool: "subset_gf_icons".to_string(),
            download_tool: "aria2c".to_string(),
            download_url_prefix: DEFAULT_DOWNLOAD_URL_PREFIX.to_string(),
            descriptor_file: PathBuf::from("download-material-symbols.afl"),
        }
    }
}

/// Resolved settings for a run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub subset_tool: String,
    pub download_tool: String,
    pub download_url_prefix: String,
    pub descriptor_path: PathBuf,
}
impl Config {
    /// Loads the configuration.
    ///
    /// An explicitly given file must exist. Otherwise [`DEFAULT_CONFIG_FILE`] is used if it is
    /// present in the working directory, and the built-in defaults if it is not.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let cwd = std::env::current_dir().context("Could not get working directory")?;
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(cwd.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };

        match path {
            Some(path) => {
                debug!("Loading configuration from {}...", path.display());
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                Config::parse(&text, &parent_dir(&path)?)
                    .with_context(|| format!("Invalid configuration in {}", path.display()))
            }
            None => Config::with_defaults(&cwd),
        }
    }

    /// Parses a configuration file, resolving relative paths against `base`.
    pub fn parse(text: &str, base: &Path) -> Result<Config> {
        Config::resolve(toml::from_str(text)?, base)
    }

    pub fn with_defaults(base: &Path) -> Result<Config> {
        Config::resolve(ConfigFile::default(), base)
    }

    fn resolve(file: ConfigFile, base: &Path) -> Result<Config> {
        ensure!(!file.subset_tool.is_empty(), "`subset_tool` must not be empty");
        Ok(Config {
            assets_dir: resolve_from(base, &file.assets_dir)?,
            subset_tool: file.subset_tool,
            download_tool: file.download_tool,
            download_url_prefix: file.download_url_prefix,
            descriptor_path: resolve_from(base, &file.descriptor_file)?,
        })
    }

    /// Overrides the assets directory, resolving it against the working directory.
    pub fn set_assets_dir(&mut self, dir: &Path) -> Result<()> {
        let cwd = std::env::current_dir().context("Could not get working directory")?;
        self.assets_dir = resolve_from(&cwd, dir)?;
        Ok(())
    }
}
