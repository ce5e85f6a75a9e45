//! Strongly-typed identifiers used across the domain.
//!
//! Two families live here. Surrogate keys (`ToolRecordId`, `OwnerRecordId`,
//! `AppUserId`, `ReportLineId`) are UUIDv7 newtypes and identify a stored
//! row; they carry no business meaning. Business keys (`ToolId`, `OwnerId`,
//! `ReportId`) are the identifiers users type and print.
//!
//! Report reconciliation matches registry records by `ToolId`, while
//! handover matches by `ToolRecordId`. The asymmetry is deliberate and kept
//! from the system being modelled: duplicate tool ids in the registry behave
//! differently under the two matching strategies.

use core::hash::{Hash, Hasher};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Surrogate key of a tool registry record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolRecordId(Uuid);

/// Surrogate key of an owner directory row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerRecordId(Uuid);

/// Surrogate key of an application user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppUserId(Uuid);

/// Report-local key of a defect report line item. Distinct from the
/// registry keys: report lines are frozen copies, not registry rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportLineId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in
            /// tests for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(ToolRecordId, "ToolRecordId");
impl_uuid_newtype!(OwnerRecordId, "OwnerRecordId");
impl_uuid_newtype!(AppUserId, "AppUserId");
impl_uuid_newtype!(ReportLineId, "ReportLineId");

/// Business identifier of a tool (e.g. `WR-001`). Printed on the tool
/// itself; may in principle appear on more than one registry record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ToolId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Business identifier of a tool owner (e.g. `E123`).
///
/// Comparison and hashing are ASCII case-insensitive: `e123` and `E123`
/// name the same owner. The original casing is preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// An unresolved owner context carries an empty identifier.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl PartialEq for OwnerId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for OwnerId {}

impl Hash for OwnerId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl core::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Human-readable defect report number, format `DFR-###`.
///
/// Assigned as `count(existing reports) + 1` at creation, zero-padded to
/// three digits. This is count-based, not max+1: if reports were ever
/// removed, gaps would not be reused and numbers could collide. A known
/// weakness of the system being modelled, preserved rather than fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Format the id for the `n`-th report (1-based).
    pub fn from_sequence(n: usize) -> Self {
        Self(format!("DFR-{n:03}"))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ReportId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
