use serde::{Deserialize, Serialize};

use toolcrib_core::{OwnerId, OwnerRecordId};

/// An owner of tools: the person a tool record is attributed to.
///
/// `id` is the directory row key; `owner_id` is the business key printed on
/// badges and typed into forms, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub id: OwnerRecordId,
    pub owner_id: OwnerId,
    pub name: String,
    pub trade: String,
    pub grade: String,
    pub department: String,
    pub shift: String,
}

impl OwnerProfile {
    pub fn new(
        owner_id: impl Into<OwnerId>,
        name: impl Into<String>,
        trade: impl Into<String>,
        grade: impl Into<String>,
        department: impl Into<String>,
        shift: impl Into<String>,
    ) -> Self {
        Self {
            id: OwnerRecordId::new(),
            owner_id: owner_id.into(),
            name: name.into(),
            trade: trade.into(),
            grade: grade.into(),
            department: department.into(),
            shift: shift.into(),
        }
    }

    /// Whether this profile can be the target of a handover or the owner
    /// context of a report. Unresolved profiles have a blank owner id.
    pub fn is_resolved(&self) -> bool {
        !self.owner_id.is_empty()
    }
}
