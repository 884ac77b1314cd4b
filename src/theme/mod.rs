//! Design tokens and theme wiring.
//!
//! `tokens` holds the raw palette; a [`Theme`] assigns palette values to
//! semantic roles on two surfaces (`background` and `foreground`). Role
//! names are open-ended strings rather than a closed enum, so new roles
//! can be wired without touching the type.
//!
//! The light theme is the only instantiated theme. Its wiring is
//! hand-authored and pinned by tests:
//!
//! | Surface    | Role          | Token             |
//! |------------|---------------|-------------------|
//! | background | primary       | neutrals.white    |
//! | background | secondary     | neutrals.gray200  |
//! | background | buttonPrimary | brand.green500    |
//! | foreground | primary       | neutrals.black    |

pub mod tokens;

pub use tokens::COLOR_TOKENS;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Role-to-color assignments for one styling surface.
///
/// Keys are semantic role names ("primary", "buttonPrimary", ...),
/// values are hex strings drawn from the palette.
pub type RoleMap = BTreeMap<&'static str, &'static str>;

/// A named collection of role-to-token assignments.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub background: RoleMap,
    pub foreground: RoleMap,
}

impl Theme {
    /// Render the theme as CSS custom properties under the given selector.
    ///
    /// Role names are converted from camelCase to kebab-case, so
    /// `background.buttonPrimary` becomes `--background-button-primary`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();
        writeln!(css, "{selector} {{").ok();
        for (surface, roles) in [("background", &self.background), ("foreground", &self.foreground)] {
            for (role, value) in roles {
                writeln!(css, "  --{surface}-{}: {value};", kebab_case(role)).ok();
            }
        }
        css.push_str("}\n");
        css
    }
}

/// The light theme, wiring palette tokens to semantic roles.
pub fn light_theme() -> Theme {
    Theme {
        background: RoleMap::from([
            ("primary", COLOR_TOKENS.neutrals.white),
            ("secondary", COLOR_TOKENS.neutrals.gray200),
            ("buttonPrimary", COLOR_TOKENS.brand.green500),
        ]),
        foreground: RoleMap::from([("primary", COLOR_TOKENS.neutrals.black)]),
    }
}

/// Convert a camelCase role name to kebab-case for CSS variable names.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme_wiring() {
        let theme = light_theme();

        assert_eq!(theme.background["primary"], COLOR_TOKENS.neutrals.white);
        assert_eq!(theme.background["secondary"], COLOR_TOKENS.neutrals.gray200);
        assert_eq!(theme.background["buttonPrimary"], COLOR_TOKENS.brand.green500);
        assert_eq!(theme.foreground["primary"], COLOR_TOKENS.neutrals.black);
    }

    #[test]
    fn test_light_theme_exact_values() {
        let theme = light_theme();

        assert_eq!(theme.background["primary"], "#EFEFEF");
        assert_eq!(theme.background["secondary"], "#C4C4C4");
        assert_eq!(theme.background["buttonPrimary"], "#6BF178");
        assert_eq!(theme.foreground["primary"], "#1C1C1C");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("primary"), "primary");
        assert_eq!(kebab_case("buttonPrimary"), "button-primary");
    }

    #[test]
    fn test_to_css() {
        let css = light_theme().to_css(":root");

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --background-primary: #EFEFEF;\n"));
        assert!(css.contains("  --background-button-primary: #6BF178;\n"));
        assert!(css.contains("  --foreground-primary: #1C1C1C;\n"));
    }

    #[test]
    fn test_open_ended_roles() {
        // Role keys are a map, not a closed enum, so extra roles are allowed.
        let mut theme = light_theme();
        theme.background.insert("buttonSecondary", COLOR_TOKENS.brand.blue500);

        assert_eq!(theme.background["buttonSecondary"], "#35A7FF");
    }
}
