//! Work experience entries.

use super::tags::{self, ProjectTag};
use crate::utils::date::Date;
use serde::Serialize;

/// A work or role entry.
///
/// An absent `end_date` means the role is ongoing. When both dates are
/// present, `end_date >= start_date` is expected; `folio check` enforces
/// it since nothing here does.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub start_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    pub logo_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_url: Option<&'static str>,
    pub tags: &'static [ProjectTag],
}

impl Experience {
    /// Ongoing roles have no end date.
    pub const fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}

/// All experience entries. Declaration order is arbitrary; consumers
/// should go through [`super::experience_sorted`].
pub const EXPERIENCE: &[Experience] = &[
    Experience {
        name: "Lumon Graphics",
        role: "Senior Rendering Engineer",
        description: "Own the Vulkan rendering backend of the in-house visualization suite: \
                      frame graph, descriptor management, and the GPU-driven culling pass.",
        location: "Austin, TX",
        start_date: Date::new(2023, 4, 3),
        end_date: None,
        logo_url: "images/Lumon.svg",
        out_url: Some("https://lumon-graphics.example.com"),
        tags: &[tags::CPP, tags::VULKAN, tags::CMAKE],
    },
    Experience {
        name: "Helix Interactive",
        role: "Software Engineer",
        description: "Built data-heavy dashboards and the internal component library for a \
                      logistics platform, plus the reporting services behind them.",
        location: "Remote",
        start_date: Date::new(2021, 1, 11),
        end_date: Some(Date::new(2023, 3, 24)),
        logo_url: "images/Helix.png",
        out_url: Some("https://helix.example.com"),
        tags: &[tags::TYPESCRIPT, tags::REACT, tags::NEXTJS, tags::POSTGRESQL],
    },
    Experience {
        name: "Fabrikam Systems",
        role: "Software Engineer",
        description: "Maintained desktop tooling for factory-floor diagnostics and migrated \
                      the build and release pipeline to Azure DevOps.",
        location: "Munich, Germany",
        start_date: Date::new(2019, 7, 1),
        end_date: Some(Date::new(2020, 12, 18)),
        logo_url: "images/Fabrikam.webp",
        out_url: None,
        tags: &[tags::CSHARP, tags::SQL_SERVER, tags::AZURE_DEVOPS, tags::VISUAL_STUDIO],
    },
    Experience {
        name: "University of Utah, SCI Institute",
        role: "Research Assistant",
        description: "Prototyped large-volume rendering experiments on OSPRay and wrote the \
                      Python analysis pipeline for the resulting traces.",
        location: "Salt Lake City, UT",
        start_date: Date::new(2017, 9, 5),
        end_date: Some(Date::new(2019, 5, 10)),
        logo_url: "images/SCI.svg",
        out_url: Some("https://www.sci.utah.edu"),
        tags: &[tags::CPP, tags::OSPRAY, tags::PYTHON],
    },
];
