use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use toolcrib_core::{DefectType, OwnerId, ReportId, ToolId, ToolRecordId, ToolStatus};
use toolcrib_owners::OwnerProfile;

/// The authoritative record of one physical tool.
///
/// Mutable entity, deliberately distinct from the frozen report line type:
/// a defect report snapshots these fields at submission time and the
/// registry is later reconciled *from* that snapshot, never overwritten by
/// it wholesale.
///
/// # Invariants (maintained by the workflow crates, not here)
/// - `defect_flag` is true iff `defect_report_number` is set and that
///   report has not been rejected.
/// - A rejected report clears the flag, report number and defect type and
///   resets `status` to `InService`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Registry row key. Handover matches on this.
    pub id: ToolRecordId,
    /// Business identifier. Report reconciliation matches on this.
    pub tool_id: ToolId,
    pub serial: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub standard_tool_name: String,
    pub cost: f64,
    pub brand: String,
    pub recommended_action: String,

    // Denormalized owner attribution, kept consistent only by handover and
    // the owner-sync pass.
    pub owner_id: OwnerId,
    pub owner_name: String,
    pub owner_trade: String,
    pub owner_grade: String,
    pub owner_department: String,
    pub owner_shift: String,
    pub handover_date: Option<NaiveDate>,

    pub status: Option<ToolStatus>,
    pub defect_flag: bool,
    pub defect_report_number: Option<ReportId>,
    pub defect_type: Option<DefectType>,
    pub scrap_date: Option<NaiveDate>,

    pub last_audit: Option<NaiveDate>,
    pub auditor: String,
    pub next_audit_due: Option<NaiveDate>,

    pub comment: String,
}

impl ToolRecord {
    /// A fresh record with only the identifying fields set. Bulk-add and
    /// CSV import build on this and fill in the rest.
    pub fn new(
        tool_id: impl Into<ToolId>,
        serial: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ToolRecordId::new(),
            tool_id: tool_id.into(),
            serial: serial.into(),
            description: description.into(),
            category: String::new(),
            quantity: 1,
            standard_tool_name: String::new(),
            cost: 0.0,
            brand: String::new(),
            recommended_action: String::new(),
            owner_id: OwnerId::empty(),
            owner_name: String::new(),
            owner_trade: String::new(),
            owner_grade: String::new(),
            owner_department: String::new(),
            owner_shift: String::new(),
            handover_date: None,
            status: None,
            defect_flag: false,
            defect_report_number: None,
            defect_type: None,
            scrap_date: None,
            last_audit: None,
            auditor: String::new(),
            next_audit_due: None,
            comment: String::new(),
        }
    }

    /// Copy the denormalized owner display fields from a profile.
    ///
    /// Leaves `owner_id` alone: owner sync keeps the stored id as-is, while
    /// handover assigns the new id itself before calling this.
    pub fn copy_owner_fields(&mut self, profile: &OwnerProfile) {
        self.owner_name = profile.name.clone();
        self.owner_trade = profile.trade.clone();
        self.owner_grade = profile.grade.clone();
        self.owner_department = profile.department.clone();
        self.owner_shift = profile.shift.clone();
    }
}
