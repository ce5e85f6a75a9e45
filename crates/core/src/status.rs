//! Tool lifecycle status and defect classification.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a tool.
///
/// An unset status is modelled as `Option::<ToolStatus>::None` rather than a
/// variant, so the enum only ever names a real disposition. Serde names
/// match the strings used by the UI and CSV layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolStatus {
    New,
    #[serde(rename = "In Service")]
    InService,
    #[serde(rename = "Needs Inspection")]
    NeedsInspection,
    Repairable,
    Scrap,
}

impl core::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ToolStatus::New => f.write_str("New"),
            ToolStatus::InService => f.write_str("In Service"),
            ToolStatus::NeedsInspection => f.write_str("Needs Inspection"),
            ToolStatus::Repairable => f.write_str("Repairable"),
            ToolStatus::Scrap => f.write_str("Scrap"),
        }
    }
}

/// Why a tool is defective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefectType {
    Misuse,
    #[serde(rename = "Wear and Tear")]
    WearAndTear,
}

impl core::fmt::Display for DefectType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DefectType::Misuse => f.write_str("Misuse"),
            DefectType::WearAndTear => f.write_str("Wear and Tear"),
        }
    }
}
