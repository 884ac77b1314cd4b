//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.
//! The defaults reproduce the checked-in descriptor of the site, so a
//! missing `folio.toml` still yields the complete build configuration.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use super::super::OutputMode;
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output_mode() -> OutputMode {
        OutputMode::default()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["primevue".into(), "image".into(), "content".into()]
    }

    pub fn styles() -> Vec<PathBuf> {
        vec![
            "assets/css/variables.css".into(),
            "primeicons/primeicons.css".into(),
            "assets/css/content.css".into(),
        ]
    }

    pub mod highlight {
        pub fn langs() -> Vec<String> {
            vec!["cpp".into()]
        }

        pub fn theme() -> String {
            "github-dark".into()
        }
    }
}
