//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)               |
//! | `[build]`   | Build descriptor (mode, extensions, styles)      |
//! | `[extra]`   | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Andrew Walker"
//! description = "Graphics engineer portfolio"
//! url = "https://andrewwlkr.dev"
//!
//! [build]
//! output_mode = "static"
//! crawl_links = true
//! extensions = ["primevue", "image", "content"]
//!
//! [build.highlight]
//! langs = ["cpp"]
//! theme = "github-dark"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! Every field has a default reproducing the site's checked-in
//! descriptor, so running without a config file is fully supported.

mod base;
mod build;
pub mod defaults;
mod error;

// Re-export public types used by other modules
pub use build::OutputMode;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build descriptor
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.set_root(&root);
        self.update_path_with_root(&root, cli);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update local paths relative to root and normalize to absolute.
    ///
    /// Only the config path and the export output are local filesystem
    /// paths; `build.styles` entries are renderer-relative and stay as
    /// written.
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the build descriptor.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.build.extensions.iter().any(|ext| ext.is_empty()) {
            bail!(ConfigError::Validation(
                "[build.extensions] must not contain empty identifiers".into()
            ));
        }

        if self.build.highlight.langs.is_empty() {
            bail!(ConfigError::Validation(
                "[build.highlight.langs] must have at least one language".into()
            ));
        }

        if self.build.highlight.theme.is_empty() {
            bail!(ConfigError::Validation(
                "[build.highlight.theme] must not be empty".into()
            ));
        }

        if self.build.styles.iter().any(|path| path.as_os_str().is_empty()) {
            bail!(ConfigError::Validation(
                "[build.styles] must not contain empty paths".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
