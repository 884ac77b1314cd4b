//! `[build]` section configuration.
//!
//! The declarative build descriptor handed to the external static-site
//! renderer: output mode, prerender crawling, style inlining, syntax
//! highlighting, enabled extensions, and global stylesheet entries.
//! Nothing in this crate executes the build; the descriptor is exported
//! as part of `folio export` and mirrored by the renderer's own config.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// Site output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Fully prerendered output, no server runtime (default).
    #[default]
    Static,
    /// Per-request server rendering.
    Server,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in folio.toml - build descriptor for the renderer.
///
/// # Example
/// ```toml
/// [build]
/// output_mode = "static"
/// crawl_links = true
/// inline_styles = true
/// extensions = ["primevue", "image", "content"]
/// styles = ["assets/css/variables.css", "primeicons/primeicons.css"]
///
/// [build.highlight]
/// langs = ["cpp"]
/// theme = "github-dark"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Output mode for the generated site.
    #[serde(default = "defaults::build::output_mode")]
    #[educe(Default = defaults::build::output_mode())]
    pub output_mode: OutputMode,

    /// Crawl all discovered links when prerendering.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub crawl_links: bool,

    /// Inline critical styles into prerendered pages.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub inline_styles: bool,

    /// Export output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Enabled renderer extensions, in load order.
    #[serde(default = "defaults::build::extensions")]
    #[educe(Default = defaults::build::extensions())]
    pub extensions: Vec<String>,

    /// Global stylesheet entry points, in link order.
    #[serde(default = "defaults::build::styles")]
    #[educe(Default = defaults::build::styles())]
    pub styles: Vec<PathBuf>,

    /// Markdown syntax highlighting settings.
    #[serde(default)]
    pub highlight: HighlightConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.highlight]` section - markdown syntax highlighting.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HighlightConfig {
    /// Languages to load highlighting grammars for.
    #[serde(default = "defaults::build::highlight::langs")]
    #[educe(Default = defaults::build::highlight::langs())]
    pub langs: Vec<String>,

    /// Highlighting color theme name.
    #[serde(default = "defaults::build::highlight::theme")]
    #[educe(Default = defaults::build::highlight::theme())]
    pub theme: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output_mode, OutputMode::Static);
        assert!(config.build.crawl_links);
        assert!(config.build.inline_styles);
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_default_extensions_exact() {
        let config = BuildConfig::default();

        assert_eq!(config.extensions, ["primevue", "image", "content"]);
    }

    #[test]
    fn test_default_styles_order() {
        let config = BuildConfig::default();
        let styles: Vec<_> = config.styles.iter().map(|p| p.to_str().unwrap()).collect();

        assert_eq!(
            styles,
            [
                "assets/css/variables.css",
                "primeicons/primeicons.css",
                "assets/css/content.css",
            ]
        );
    }

    #[test]
    fn test_default_highlight() {
        let config = BuildConfig::default();

        assert_eq!(config.highlight.langs, ["cpp"]);
        assert_eq!(config.highlight.theme, "github-dark");
    }

    #[test]
    fn test_output_mode_parsing() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
            [build]
            output_mode = "server"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.build.output_mode, OutputMode::Server);

        let config = r#"
            [base]
            title = "Test"
            description = "Test"
            [build]
            output_mode = "embedded"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_extension_override_preserves_order() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
            [build]
            extensions = ["content", "image"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.extensions, ["content", "image"]);
    }

    #[test]
    fn test_highlight_override() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
            [build.highlight]
            langs = ["cpp", "rust"]
            theme = "github-light"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.highlight.langs, ["cpp", "rust"]);
        assert_eq!(config.build.highlight.theme, "github-light");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
            [build]
            unknown_field = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
