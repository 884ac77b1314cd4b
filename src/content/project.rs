//! Portfolio project entries.

use super::tags::{self, ProjectTag};
use serde::Serialize;

/// A portfolio item. Tag order is display order.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub tags: &'static [ProjectTag],
}

/// All portfolio projects, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "Aurora",
        description: "Physically based path tracer with a Vulkan compute backend, \
                      spectral rendering, and a small scene description language.",
        url: Some("https://github.com/andrewwlkr/aurora"),
        icon: Some("images/Aurora.png"),
        tags: &[tags::CPP, tags::VULKAN, tags::CMAKE],
    },
    Project {
        name: "Voluma",
        description: "Interactive volume renderer for scientific datasets built on OSPRay, \
                      with Python bindings for notebook use.",
        url: Some("https://github.com/andrewwlkr/voluma"),
        icon: None,
        tags: &[tags::CPP, tags::OSPRAY, tags::PYTHON],
    },
    Project {
        name: "Shaderground",
        description: "Browser playground for writing and sharing WebGL 2 fragment shaders, \
                      with live reload and uniform inspection.",
        url: Some("https://shaderground.dev"),
        icon: Some("images/Shaderground.svg"),
        tags: &[tags::JAVASCRIPT, tags::WEBGL2],
    },
    Project {
        name: "Trailhead",
        description: "Cross-platform hiking log with offline maps and photo journals, \
                      syncing through a small Nest.js API.",
        url: None,
        icon: Some("images/Trailhead.png"),
        tags: &[tags::REACT_NATIVE, tags::EXPO, tags::TYPESCRIPT, tags::NESTJS, tags::POSTGRESQL],
    },
    Project {
        name: "folio",
        description: "This site: typed content tables, design tokens, and the static build \
                      descriptor behind the portfolio you are reading.",
        url: Some("https://github.com/andrewwlkr/folio"),
        icon: None,
        tags: &[tags::RUST],
    },
];
