//! Export the content tables and theme for the external renderer.
//!
//! Writes under `build.output`:
//!
//! | Path                    | Content                                  |
//! |-------------------------|------------------------------------------|
//! | `_data/tags.json`       | The full tag catalog                     |
//! | `_data/projects.json`   | Projects, declaration order              |
//! | `_data/experience.json` | Experience entries, display order        |
//! | `_data/manifest.json`   | The build descriptor                     |
//! | `css/variables.css`     | Light theme as CSS custom properties     |
//!
//! The content checks run first; invalid tables are never exported.

use crate::config::{OutputMode, SiteConfig};
use crate::content::{CATALOG, PROJECTS, experience_sorted};
use crate::theme::light_theme;
use crate::{check, log};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The build descriptor handed to the external renderer, mirroring the
/// recognized options of its own configuration surface.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    output_mode: OutputMode,
    crawl_links: bool,
    inline_styles: bool,
    highlight: Highlight<'a>,
    extensions: &'a [String],
    styles: &'a [PathBuf],
}

#[derive(Debug, Serialize)]
struct Highlight<'a> {
    langs: &'a [String],
    theme: &'a str,
}

impl<'a> Manifest<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        let build = &config.build;
        Self {
            output_mode: build.output_mode,
            crawl_links: build.crawl_links,
            inline_styles: build.inline_styles,
            highlight: Highlight {
                langs: &build.highlight.langs,
                theme: &build.highlight.theme,
            },
            extensions: &build.extensions,
            styles: &build.styles,
        }
    }
}

/// Validate the content, then write all export artifacts.
pub fn run(config: &SiteConfig, clean: bool) -> Result<()> {
    check::run()?;

    let output = &config.build.output;
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean `{}`", output.display()))?;
    }

    write_json(&output.join("_data/tags.json"), &CATALOG)?;
    write_json(&output.join("_data/projects.json"), &PROJECTS)?;
    write_json(&output.join("_data/experience.json"), &experience_sorted())?;
    write_json(&output.join("_data/manifest.json"), &Manifest::new(config))?;

    let css_path = output.join("css/variables.css");
    write_file(&css_path, light_theme().to_css(":root").as_bytes())?;

    log!("export"; "wrote data and variables under `{}`", output.display());
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_file(path, json.as_bytes())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed to write `{}`", path.display()))
}
