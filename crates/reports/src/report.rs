use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use toolcrib_core::{DefectType, OwnerId, ReportId, ReportLineId, ToolId, ToolStatus};
use toolcrib_registry::ToolRecord;

/// Workflow state of a defect report. Exactly one transition happens:
/// `PendingApproval` to either terminal state, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReportStatus::PendingApproval)
    }
}

/// Owner attribution of a report, copied from the submitting context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub dfr_date: NaiveDate,
    pub owner_id: OwnerId,
    pub owner_name: String,
    pub department: String,
    pub shift: String,
}

impl ReportHeader {
    pub fn is_resolved(&self) -> bool {
        !self.owner_id.is_empty()
    }
}

/// One line of a defect report: a frozen copy of a tool entry's relevant
/// fields at submission time.
///
/// Keyed by a report-local id, not the registry key. This type is a value,
/// not an entity — changing a line after the report is created is not
/// expressible through the report's API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub id: ReportLineId,
    pub tool_id: ToolId,
    pub serial: String,
    pub description: String,
    pub quantity: u32,
    pub status: Option<ToolStatus>,
    pub recommended_action: String,
    pub comment: String,
    pub defect_type: Option<DefectType>,
}

impl ReportLine {
    /// Start a working-set line from a registry record: identifying fields
    /// copied, disposition reset to `New`, action/comment/defect type
    /// cleared for the technician to fill in.
    pub fn draft_from(record: &ToolRecord) -> Self {
        Self {
            id: ReportLineId::new(),
            tool_id: record.tool_id.clone(),
            serial: record.serial.clone(),
            description: record.description.clone(),
            quantity: record.quantity,
            status: Some(ToolStatus::New),
            recommended_action: String::new(),
            comment: String::new(),
            defect_type: None,
        }
    }
}

/// A submitted defect report.
///
/// Fields are private: the line items are a frozen snapshot and only
/// `status` may change after creation, which the report store does through
/// `transition`. The registry is reconciled from the snapshot, never the
/// reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectReport {
    id: ReportId,
    dfr_date: NaiveDate,
    owner_id: OwnerId,
    owner_name: String,
    department: String,
    shift: String,
    submitted_by: String,
    status: ReportStatus,
    items: Vec<ReportLine>,
    photo: Option<String>,
}

impl DefectReport {
    pub(crate) fn new(
        id: ReportId,
        header: ReportHeader,
        submitted_by: String,
        items: Vec<ReportLine>,
        photo: Option<String>,
    ) -> Self {
        Self {
            id,
            dfr_date: header.dfr_date,
            owner_id: header.owner_id,
            owner_name: header.owner_name,
            department: header.department,
            shift: header.shift,
            submitted_by,
            status: ReportStatus::PendingApproval,
            items,
            photo,
        }
    }

    pub fn id(&self) -> &ReportId {
        &self.id
    }

    /// Submission date, also used as the scrap date when an approved line
    /// carries a `Scrap` disposition.
    pub fn dfr_date(&self) -> NaiveDate {
        self.dfr_date
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn shift(&self) -> &str {
        &self.shift
    }

    pub fn submitted_by(&self) -> &str {
        &self.submitted_by
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    /// The frozen snapshot, in submission order.
    pub fn items(&self) -> &[ReportLine] {
        &self.items
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// The first line carrying the given tool id. Reconciliation takes the
    /// disposition from the first matching line when a tool id appears on
    /// several.
    pub fn line_for_tool(&self, tool_id: &ToolId) -> Option<&ReportLine> {
        self.items.iter().find(|l| l.tool_id == *tool_id)
    }

    pub(crate) fn set_status(&mut self, status: ReportStatus) {
        self.status = status;
    }
}
