//! Technology tag catalog.
//!
//! A fixed table of named tags, each with an optional badge color and
//! icon. Projects and experience entries reference these constants;
//! nothing is created at runtime. The catalog itself performs no
//! validation, a malformed color or a dangling icon path is a content
//! authoring error caught by `folio check`, not here.

use serde::Serialize;

/// A small labeled badge describing a technology or skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTag {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<&'static str>,
}

impl ProjectTag {
    const fn new(
        name: &'static str,
        color: Option<&'static str>,
        icon_url: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            color,
            icon_url,
        }
    }
}

// corresponds to var(--colors-cpp-primary)
pub const CPP: ProjectTag = ProjectTag::new("C++", Some("#659AD2"), Some("images/Cpp.svg"));
pub const VULKAN: ProjectTag = ProjectTag::new("Vulkan", Some("#E38190"), Some("images/Vulkan.png"));
pub const CMAKE: ProjectTag = ProjectTag::new("CMake", Some("#A3A3A3"), Some("images/CMake.svg"));
pub const RUST: ProjectTag = ProjectTag::new("Rust", Some("#D6795A"), Some("images/Rust.svg"));
pub const PYTHON: ProjectTag = ProjectTag::new("Python", Some("#FFE873"), Some("images/Python.svg"));
pub const OSPRAY: ProjectTag = ProjectTag::new("OSPRay", Some("#659AD2"), None);
pub const JAVASCRIPT: ProjectTag = ProjectTag::new("Javascript", Some("#F0DB4F"), None);
pub const WEBGL2: ProjectTag = ProjectTag::new("WebGL 2", Some("#D13850"), None);
pub const SWIFT: ProjectTag = ProjectTag::new("Swift", Some("#F05138"), Some("images/Swift.jpg"));
pub const GO: ProjectTag = ProjectTag::new("Go", Some("#29BEB0"), Some("images/Go.png"));
pub const NESTJS: ProjectTag = ProjectTag::new("Nest.js", Some("#D13850"), Some("images/NestJs.png"));
pub const POSTGRESQL: ProjectTag =
    ProjectTag::new("Postgres", Some("#336791"), Some("/images/Postgres.png"));
pub const EXPO: ProjectTag = ProjectTag::new("Expo", Some("#787878"), Some("images/Expo.webp"));
pub const CSHARP: ProjectTag = ProjectTag::new("C#", Some("#9179E4"), Some("images/CSharp.webp"));
pub const AZURE_DEVOPS: ProjectTag =
    ProjectTag::new("Azure DevOps", Some("#5EACD6"), Some("images/Azure.webp"));
pub const VISUAL_STUDIO: ProjectTag =
    ProjectTag::new("Visual Studio", Some("#D59DFF"), Some("images/VisualStudio.png"));
pub const REACT_NATIVE: ProjectTag =
    ProjectTag::new("React Native", Some("#61DAFB"), Some("images/React.svg"));
pub const REACT: ProjectTag = ProjectTag::new("React", Some("#61DAFB"), Some("images/React.svg"));
pub const NEXTJS: ProjectTag = ProjectTag::new("Next.js", Some("#787878"), Some("images/Vercel.svg"));
pub const TYPESCRIPT: ProjectTag =
    ProjectTag::new("Typescript", Some("#358EF1"), Some("images/TS.svg"));
pub const SQL_SERVER: ProjectTag =
    ProjectTag::new("SQL Server", Some("#E38190"), Some("images/SqlServer.png"));

/// Every tag in the catalog, enumerable for validation and export.
pub const CATALOG: &[ProjectTag] = &[
    CPP,
    VULKAN,
    CMAKE,
    RUST,
    PYTHON,
    OSPRAY,
    JAVASCRIPT,
    WEBGL2,
    SWIFT,
    GO,
    NESTJS,
    POSTGRESQL,
    EXPO,
    CSHARP,
    AZURE_DEVOPS,
    VISUAL_STUDIO,
    REACT_NATIVE,
    REACT,
    NEXTJS,
    TYPESCRIPT,
    SQL_SERVER,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpp_tag_values() {
        assert_eq!(CPP.name, "C++");
        assert_eq!(CPP.color, Some("#659AD2"));
        assert_eq!(CPP.icon_url, Some("images/Cpp.svg"));
    }

    #[test]
    fn test_catalog_contains_every_constant() {
        assert_eq!(CATALOG.len(), 21);
        assert!(CATALOG.contains(&RUST));
        assert!(CATALOG.contains(&SQL_SERVER));
    }

    #[test]
    fn test_tags_without_icons() {
        for tag in [OSPRAY, JAVASCRIPT, WEBGL2] {
            assert!(tag.icon_url.is_none());
            assert!(tag.color.is_some());
        }
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(CPP).unwrap();

        assert_eq!(json["name"], "C++");
        assert_eq!(json["color"], "#659AD2");
        assert_eq!(json["iconUrl"], "images/Cpp.svg");
    }

    #[test]
    fn test_serialize_skips_absent_icon() {
        let json = serde_json::to_value(OSPRAY).unwrap();

        assert!(json.get("iconUrl").is_none());
    }
}
