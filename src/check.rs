//! Data-integrity checks over the static content tables.
//!
//! The tables themselves accept anything at definition time; this pass
//! is where authoring mistakes surface. Checks:
//!
//! - every catalog tag has a non-empty, unique name and a `#RRGGBB`
//!   color when one is present
//! - every tag referenced by a project or experience entry exists in
//!   the catalog
//! - required entity fields are non-empty, dates are valid, and a
//!   present `end_date` is not before `start_date`
//! - the light theme wiring matches the pinned palette values
//!
//! All violations are collected and reported together rather than
//! stopping at the first one.

use crate::content::{CATALOG, EXPERIENCE, PROJECTS, ProjectTag};
use crate::log;
use crate::theme::{COLOR_TOKENS, light_theme};
use anyhow::{Result, bail};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Run every content check. Errors with the full violation list.
pub fn run() -> Result<()> {
    let mut violations = Vec::new();

    check_catalog(&mut violations);
    check_projects(&mut violations);
    check_experience(&mut violations);
    check_theme(&mut violations);

    if !violations.is_empty() {
        bail!(
            "{} content violation(s):\n  - {}",
            violations.len(),
            violations.join("\n  - ")
        );
    }

    log!("check";
        "verified {} tags, {} projects, {} experience entries",
        CATALOG.len(),
        PROJECTS.len(),
        EXPERIENCE.len()
    );
    Ok(())
}

fn check_catalog(violations: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for tag in CATALOG {
        if tag.name.is_empty() {
            violations.push("catalog tag with empty name".into());
            continue;
        }
        if !seen.insert(tag.name) {
            violations.push(format!("duplicate tag name in catalog: `{}`", tag.name));
        }
        if let Some(color) = tag.color
            && !HEX_COLOR.is_match(color)
        {
            violations.push(format!("tag `{}` has malformed color `{color}`", tag.name));
        }
        if let Some(icon) = tag.icon_url
            && icon.is_empty()
        {
            violations.push(format!("tag `{}` has an empty icon path", tag.name));
        }
    }
}

fn check_projects(violations: &mut Vec<String>) {
    for project in PROJECTS {
        if project.name.is_empty() {
            violations.push("project with empty name".into());
        }
        if project.description.is_empty() {
            violations.push(format!("project `{}` has an empty description", project.name));
        }
        check_tag_refs(&format!("project `{}`", project.name), project.tags, violations);
    }
}

fn check_experience(violations: &mut Vec<String>) {
    for entry in EXPERIENCE {
        let required = [
            ("name", entry.name),
            ("role", entry.role),
            ("description", entry.description),
            ("location", entry.location),
            ("logoUrl", entry.logo_url),
        ];
        for (field, value) in required {
            if value.is_empty() {
                violations.push(format!("experience `{}` has an empty {field}", entry.name));
            }
        }

        if let Err(err) = entry.start_date.validate() {
            violations.push(format!("experience `{}` startDate: {err}", entry.name));
        }
        if let Some(end) = entry.end_date {
            if let Err(err) = end.validate() {
                violations.push(format!("experience `{}` endDate: {err}", entry.name));
            } else if end < entry.start_date {
                violations.push(format!(
                    "experience `{}` ends ({end}) before it starts ({})",
                    entry.name, entry.start_date
                ));
            }
        }

        check_tag_refs(&format!("experience `{}`", entry.name), entry.tags, violations);
    }
}

/// Referential consistency: entity tags must come from the catalog.
fn check_tag_refs(owner: &str, tags: &[ProjectTag], violations: &mut Vec<String>) {
    for tag in tags {
        if !CATALOG.iter().any(|t| t.name == tag.name) {
            violations.push(format!("{owner} references unknown tag `{}`", tag.name));
        }
    }
}

fn check_theme(violations: &mut Vec<String>) {
    let theme = light_theme();
    let expected = [
        ("background", "primary", COLOR_TOKENS.neutrals.white),
        ("background", "secondary", COLOR_TOKENS.neutrals.gray200),
        ("background", "buttonPrimary", COLOR_TOKENS.brand.green500),
        ("foreground", "primary", COLOR_TOKENS.neutrals.black),
    ];

    for (surface, role, token) in expected {
        let roles = match surface {
            "background" => &theme.background,
            _ => &theme.foreground,
        };
        match roles.get(role) {
            Some(value) if *value == token => {}
            Some(value) => violations.push(format!(
                "theme {surface}.{role} is `{value}`, expected `{token}`"
            )),
            None => violations.push(format!("theme {surface}.{role} is not wired")),
        }
    }

    // Every wired value must come out of the palette.
    let palette: HashSet<_> = COLOR_TOKENS.entries().iter().map(|(_, _, v)| *v).collect();
    for (surface, roles) in [("background", &theme.background), ("foreground", &theme.foreground)]
    {
        for (role, value) in roles {
            if !palette.contains(value) {
                violations.push(format!(
                    "theme {surface}.{role} value `{value}` is not a palette token"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tags;

    #[test]
    fn test_run_passes_on_shipped_content() {
        assert!(run().is_ok());
    }

    #[test]
    fn test_hex_color_pattern() {
        assert!(HEX_COLOR.is_match("#659AD2"));
        assert!(HEX_COLOR.is_match("#ffffff"));
        assert!(!HEX_COLOR.is_match("659AD2"));
        assert!(!HEX_COLOR.is_match("#659AD"));
        assert!(!HEX_COLOR.is_match("#659AD2F"));
        assert!(!HEX_COLOR.is_match("#GGGGGG"));
    }

    #[test]
    fn test_every_catalog_color_is_valid_hex() {
        for tag in CATALOG {
            if let Some(color) = tag.color {
                assert!(HEX_COLOR.is_match(color), "tag `{}`: {color}", tag.name);
            }
        }
    }

    #[test]
    fn test_check_tag_refs_flags_unknown_tag() {
        let phantom = [ProjectTag {
            name: "Fortran",
            color: None,
            icon_url: None,
        }];
        let mut violations = Vec::new();

        check_tag_refs("project `test`", &phantom, &mut violations);

        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("Fortran"));
    }

    #[test]
    fn test_check_tag_refs_accepts_catalog_tags() {
        let mut violations = Vec::new();

        check_tag_refs("project `test`", &[tags::RUST, tags::CPP], &mut violations);

        assert!(violations.is_empty());
    }

    #[test]
    fn test_check_theme_is_clean() {
        let mut violations = Vec::new();
        check_theme(&mut violations);
        assert!(violations.is_empty(), "{violations:?}");
    }
}
